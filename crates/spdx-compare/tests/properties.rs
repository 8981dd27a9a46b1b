//! Property tests for cell formatting.

use std::sync::Arc;

use proptest::prelude::*;
use spdx_compare::ValueRenderer;
use spdx_compare::format::{checksums_to_string, join_lines_bounded};
use spdx_model::{Checksum, ChecksumAlgorithm};

fn algorithm() -> impl Strategy<Value = ChecksumAlgorithm> {
    prop_oneof![
        Just(ChecksumAlgorithm::Sha1),
        Just(ChecksumAlgorithm::Sha256),
        Just(ChecksumAlgorithm::Sha512),
        Just(ChecksumAlgorithm::Md5),
        Just(ChecksumAlgorithm::Blake3),
    ]
}

proptest! {
    #[test]
    fn bounded_join_never_exceeds_limit(
        lines in prop::collection::vec("[a-zé ]{0,40}", 0..40),
        max in 0usize..400,
    ) {
        let joined = join_lines_bounded(&lines, max);
        let full = lines.join("\n");

        if full.chars().count() <= max {
            prop_assert_eq!(joined, full);
        } else {
            let parts: Vec<&str> = joined.split('\n').collect();
            let kept = parts.len() - 1;
            // only a lone marker may exceed a limit shorter than itself
            if kept > 0 {
                prop_assert!(joined.chars().count() <= max);
            }
            let elided: usize = parts[kept]
                .strip_prefix('[')
                .and_then(|rest| rest.strip_suffix(" more...]"))
                .and_then(|count| count.parse().ok())
                .unwrap_or(0);
            prop_assert!(elided >= 1);
            prop_assert_eq!(kept + elided, lines.len());
            for (kept_line, line) in parts.iter().zip(&lines).take(kept) {
                prop_assert_eq!(*kept_line, line.as_str());
            }
        }
    }

    #[test]
    fn checksum_order_is_irrelevant(
        values in prop::collection::vec((algorithm(), "[0-9a-f]{8}"), 0..12),
        seed in any::<u64>(),
    ) {
        let checksums: Vec<Arc<Checksum>> = values
            .iter()
            .map(|(algorithm, value)| Arc::new(Checksum::new(*algorithm, value.clone())))
            .collect();
        let mut shuffled = checksums.clone();
        if !shuffled.is_empty() {
            let len = shuffled.len();
            shuffled.rotate_left((seed as usize) % len);
            shuffled.reverse();
        }

        let renderer = ValueRenderer::new(32000);
        let a = checksums_to_string(&renderer, &checksums).unwrap();
        let b = checksums_to_string(&renderer, &shuffled).unwrap();
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(checksums_to_string(&renderer, &checksums).unwrap(), a);
    }
}
