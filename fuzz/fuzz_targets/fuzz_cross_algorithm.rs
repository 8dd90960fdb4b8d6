#![no_main]

use libfuzzer_sys::fuzz_target;

use matcalc_core::{matrices_equal, multiply, Algorithm, Element, Matrix};

fuzz_target!(|data: &[u8]| {
    let Some((&first, rest)) = data.split_first() else {
        return;
    };
    // Dimension capped at 24 so the recursive algorithms stay fast
    let n = usize::from(first % 25);
    if rest.len() < 2 * n * n {
        return;
    }

    let (left, right) = rest.split_at(n * n);
    let a = Matrix::from_fn(n, |i, j| Element::from(left[i * n + j] as i8));
    let b = Matrix::from_fn(n, |i, j| Element::from(right[i * n + j] as i8));

    let classical = multiply(&a, &b, Algorithm::Classical).unwrap();
    let dc = multiply(&a, &b, Algorithm::NaiveDc).unwrap();
    let strassen = multiply(&a, &b, Algorithm::Strassen).unwrap();

    assert_eq!(classical.dim(), n);
    assert!(
        matrices_equal(&classical, &dc, &strassen),
        "algorithms disagree at n={n}"
    );
});
