// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use proptest::prelude::*;

use prism_math::{
    parse_tuple, Color, Matrix3x3, Matrix4x4, ParseError, Quaternion, Vector2, Vector3, Vector4,
};

#[test]
fn vectors_print_as_tuples() {
    assert_eq!(Vector2::new(1.0f32, -2.5).to_string(), "(1, -2.5)");
    assert_eq!(Vector3::new(0.1f32, 0.0, 3.0).to_string(), "(0.1, 0, 3)");
    assert_eq!(Vector4::<f32>::UNIT_W.to_string(), "(0, 0, 0, 1)");
    assert_eq!(Quaternion::<f32>::IDENTITY.to_string(), "(0, 0, 0, 1)");
    assert_eq!(Color::<f32>::RED.to_string(), "(1, 0, 0, 1)");
}

#[test]
fn precision_flag_applies_to_every_component() {
    let v = Vector3::new(1.0f32, 2.0 / 3.0, -0.1);
    assert_eq!(format!("{v:.2}"), "(1.00, 0.67, -0.10)");
}

#[test]
fn matrices_print_one_row_per_line() {
    let m = Matrix3x3::<f32>::IDENTITY;
    assert_eq!(m.to_string(), "{(1, 0, 0)\n(0, 1, 0)\n(0, 0, 1)}");
    let t = Matrix4x4::from_translation(Vector3::new(1.0f32, 2.0, 3.0));
    assert_eq!(
        t.to_string(),
        "{(1, 0, 0, 0)\n(0, 1, 0, 0)\n(0, 0, 1, 0)\n(1, 2, 3, 1)}"
    );
}

#[test]
fn parsing_tolerates_whitespace() {
    let v: Vector3<f32> = " ( 1 ,2,\t3.5 ) ".parse().unwrap_or_default();
    assert_eq!(v, Vector3::new(1.0, 2.0, 3.5));
    let m: Matrix3x3<f32> = "{ (1,0,0) (0,1,0)\n(0,0,1) }"
        .parse()
        .unwrap_or(Matrix3x3::ZERO);
    assert_eq!(m, Matrix3x3::IDENTITY);
}

#[test]
fn parse_errors_are_specific() {
    assert_eq!(
        "(1, 2)".parse::<Vector3<f32>>(),
        Err(ParseError::Arity {
            expected: 3,
            found: 2
        })
    );
    assert_eq!(
        "(1, 2, 3, 4)".parse::<Vector3<f32>>(),
        Err(ParseError::Arity {
            expected: 3,
            found: 4
        })
    );
    assert_eq!(
        "(1, x, 3)".parse::<Vector3<f32>>(),
        Err(ParseError::Number {
            text: "x".to_owned()
        })
    );
    assert_eq!(
        "1, 2, 3".parse::<Vector3<f32>>(),
        Err(ParseError::Expected {
            expected: '(',
            offset: 0
        })
    );
    assert!(matches!(
        "{(1,0,0)(0,1,0)}".parse::<Matrix3x3<f32>>(),
        Err(ParseError::Expected { expected: '(', .. })
    ));
}

#[test]
fn parse_tuple_is_reusable() {
    assert_eq!(parse_tuple::<f32, 2>("(4, 5)"), Ok([4.0, 5.0]));
    assert_eq!(
        ParseError::Trailing { offset: 3 }.to_string(),
        "unexpected trailing input at byte 3"
    );
}

proptest! {
    #[test]
    fn printed_vectors_parse_back_exactly(c in prop::array::uniform4(-1.0e6f32..1.0e6)) {
        let v = Vector4::from_array(c);
        prop_assert_eq!(v.to_string().parse::<Vector4<f32>>(), Ok(v));
    }

    #[test]
    fn printed_matrices_parse_back_exactly(
        rows in prop::array::uniform4(prop::array::uniform4(-1.0e3f32..1.0e3))
    ) {
        let m = Matrix4x4::new(rows);
        prop_assert_eq!(m.to_string().parse::<Matrix4x4<f32>>(), Ok(m));
    }
}
