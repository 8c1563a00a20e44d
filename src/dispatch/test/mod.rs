//! Tests for the dispatch variants

use super::code::{get_variants, Variant};
use super::transform;
use crate::error::{BenchError, Result};

/// Inputs covering zero, small values and the top of the workload range.
pub fn verification_inputs() -> Vec<i32> {
    vec![
        0,
        1,
        2,
        5,
        10,
        255,
        1000,
        65_536,
        1_000_000,
        crate::workload::VALUE_CAP - 1,
    ]
}

/// Check one variant against the reference transform.
pub fn verify_variant(variant: &Variant, input: &[i32]) -> Result<()> {
    let mut output = Vec::with_capacity(input.len());
    (variant.function)(input, &mut output);

    for (index, &value) in input.iter().enumerate() {
        let expected = transform(value);
        let actual = match output.get(index) {
            Some(&actual) => actual,
            None => {
                return Err(BenchError::VerificationFailed {
                    strategy: variant.name(),
                    index,
                    expected,
                    actual: 0,
                })
            }
        };
        if actual != expected {
            return Err(BenchError::VerificationFailed {
                strategy: variant.name(),
                index,
                expected,
                actual,
            });
        }
    }

    // Surplus output is a divergence as well.
    if let Some(&actual) = output.get(input.len()) {
        return Err(BenchError::VerificationFailed {
            strategy: variant.name(),
            index: input.len(),
            expected: 0,
            actual,
        });
    }

    Ok(())
}

/// Verify all variants produce the same results as the reference transform
pub fn verify_all() -> Result<()> {
    let values = verification_inputs();
    for variant in get_variants() {
        verify_variant(&variant, &values)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workload::WorkloadGenerator;

    #[test]
    fn test_all_variants() {
        verify_all().expect("All variants should produce correct results");
    }

    #[test]
    fn test_expected_computation() {
        // 7 * 3 + 5 = 26
        for variant in get_variants() {
            let mut output = Vec::new();
            (variant.function)(&[7], &mut output);
            assert_eq!(output, vec![26], "{}: transform(7) should be 26", variant.name());
        }
    }

    #[test]
    fn test_empty_input() {
        for variant in get_variants() {
            let mut output = Vec::new();
            (variant.function)(&[], &mut output);
            assert!(output.is_empty(), "{} produced output for empty input", variant.name());
        }
    }

    #[test]
    fn test_all_variants_agree_on_generated_data() {
        let mut generator = WorkloadGenerator::with_seed(0xC0FFEE);
        let input = generator.generate(10_000);
        let expected: Vec<i32> = input.iter().map(|&x| x * 3 + 5).collect();

        for variant in get_variants() {
            let mut output = Vec::with_capacity(input.len());
            (variant.function)(&input, &mut output);
            assert_eq!(output, expected, "Variant {} mismatch", variant.name());
        }
    }

    #[test]
    fn test_verify_variant_reports_divergence() {
        fn off_by_one(input: &[i32], output: &mut Vec<i32>) {
            output.extend(input.iter().map(|&x| x * 3 + 6));
        }
        let broken = Variant {
            strategy: crate::dispatch::DispatchStrategy::StaticCall,
            description: "broken",
            function: off_by_one,
        };

        match verify_variant(&broken, &[4]) {
            Err(BenchError::VerificationFailed {
                index,
                expected,
                actual,
                ..
            }) => {
                assert_eq!(index, 0);
                assert_eq!(expected, 17);
                assert_eq!(actual, 18);
            }
            other => panic!("expected a verification failure, got {:?}", other),
        }
    }

    #[test]
    fn test_verify_variant_reports_missing_output() {
        fn drops_last(input: &[i32], output: &mut Vec<i32>) {
            let keep = input.len().saturating_sub(1);
            output.extend(input[..keep].iter().map(|&x| x * 3 + 5));
        }
        let broken = Variant {
            strategy: crate::dispatch::DispatchStrategy::StaticCall,
            description: "broken",
            function: drops_last,
        };

        assert!(matches!(
            verify_variant(&broken, &[1, 2]),
            Err(BenchError::VerificationFailed { index: 1, .. })
        ));
    }
}
