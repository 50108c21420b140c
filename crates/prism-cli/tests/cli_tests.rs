// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use assert_cmd::Command;
use predicates::prelude::*;

const SCALE: &str = "{(2,0,0,0) (0,4,0,0) (0,0,8,0) (0,0,0,1)}";
const SHIFT: &str = "{(1,0,0,0) (0,1,0,0) (0,0,1,0) (1,2,3,1)}";
const SINGULAR: &str = "{(0,0,0,0) (0,0,0,0) (0,0,0,0) (0,0,0,0)}";

fn prism() -> Command {
    Command::new(env!("CARGO_BIN_EXE_prism"))
}

#[test]
fn invert_prints_inverse_in_matrix_form() {
    prism()
        .args(["invert", SCALE])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{(0.5, "))
        .stdout(predicate::str::contains("0.25"))
        .stdout(predicate::str::contains("0.125"));
}

#[test]
fn invert_singular_falls_back_to_identity() {
    prism()
        .args(["invert", SINGULAR])
        .assert()
        .success()
        .stdout("{(1, 0, 0, 0)\n(0, 1, 0, 0)\n(0, 0, 1, 0)\n(0, 0, 0, 1)}\n");
}

#[test]
fn strict_invert_rejects_singular() {
    prism()
        .args(["invert", "--strict", SINGULAR])
        .assert()
        .failure()
        .stderr(predicate::str::contains("singular"));
}

#[test]
fn transform_modes() {
    prism()
        .args(["transform", SHIFT, "(1, 1, 1)"])
        .assert()
        .success()
        .stdout("(2, 3, 4)\n");
    prism()
        .args(["transform", SHIFT, "(1, 1, 1)", "--mode", "coord"])
        .assert()
        .success()
        .stdout("(2, 3, 4)\n");
    prism()
        .args(["transform", SHIFT, "(1, 1, 1)", "--mode", "normal"])
        .assert()
        .success()
        .stdout("(1, 1, 1)\n");
}

#[test]
fn slerp_halfway_with_precision() {
    prism()
        .args([
            "slerp",
            "(0, 0, 0, 1)",
            "(0, 0, 0.7071067811865476, 0.7071067811865476)",
            "0.5",
            "--precision",
            "3",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.383, 0.924)"));
}

#[test]
fn frustum_point_test() {
    prism()
        .args(["frustum", "--near", "1", "--far", "100", "(0, 0, 50)"])
        .assert()
        .success()
        .stdout("inside\n");
    prism()
        .args(["frustum", "--near", "1", "--far", "100", "(0, 0, 1000)"])
        .assert()
        .success()
        .stdout("outside\n");
}

#[test]
fn frustum_sphere_test() {
    prism()
        .args(["frustum", "--far", "100", "--radius", "5", "(0, 0, 100)"])
        .assert()
        .success()
        .stdout("intersecting\n");
}

#[test]
fn degenerate_frustum_is_an_error() {
    prism()
        .args(["frustum", "--near", "5", "--far", "5", "(0, 0, 5)"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("degenerate projection"));
}

#[test]
fn malformed_input_reports_parse_error() {
    prism()
        .args(["transform", SHIFT, "(1, x, 1)"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("parse vector"))
        .stderr(predicate::str::contains("invalid number `x`"));
}

#[test]
fn backend_lists_both_scalars() {
    prism()
        .arg("backend")
        .assert()
        .success()
        .stdout(predicate::str::contains("f32: "))
        .stdout(predicate::str::contains("f64: portable"));
}
