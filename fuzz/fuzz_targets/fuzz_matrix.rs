#![no_main]

use libfuzzer_sys::fuzz_target;

use matcalc_core::matrix_ops::{add, pad_to_power_of_two, sub, trim};
use matcalc_core::{Element, Matrix, MatrixError};

fuzz_target!(|data: &[u8]| {
    // Bytes are split into rows at every 0xFF, so rows may be ragged
    let rows: Vec<Vec<Element>> = data
        .split(|&b| b == 0xFF)
        .take(32)
        .map(|row| row.iter().map(|&b| Element::from(b as i8)).collect())
        .collect();
    let expected = rows.len();

    match Matrix::from_rows(rows) {
        Ok(m) => {
            assert_eq!(m.dim(), expected);

            let padded = pad_to_power_of_two(&m);
            assert!(padded.dim() == 0 || padded.dim().is_power_of_two());
            assert_eq!(trim(&padded, m.dim()), m);

            let sum = add(&m, &m).unwrap();
            assert_eq!(sub(&sum, &m).unwrap(), m);
        }
        Err(MatrixError::NotSquare { len, .. }) => assert_ne!(len, expected),
        Err(e) => panic!("unexpected error: {e}"),
    }
});
