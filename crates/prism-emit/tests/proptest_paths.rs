//! Property tests for deterministic path generation.
//!
//! These use `proptest` to check the two contract properties of the
//! path generator: it is a pure function of its inputs, and distinct
//! (program, language, stage) triples never collide for a fixed
//! configuration.

use std::collections::HashSet;

use proptest::prelude::*;

use prism_emit::paths;
use prism_reflect::config::EmitConfig;
use prism_reflect::shader::ShaderStage;
use prism_reflect::slang::Slang;

fn slang_strategy() -> impl Strategy<Value = Slang> {
    proptest::sample::select(Slang::ALL.to_vec())
}

fn stage_strategy() -> impl Strategy<Value = ShaderStage> {
    proptest::sample::select(ShaderStage::ALL.to_vec())
}

fn config(prefix: &str, module: Option<String>) -> EmitConfig {
    let mut cfg = EmitConfig::new(prefix);
    cfg.module = module;
    cfg
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn stage_path_is_a_pure_function(
        prefix in "[a-z][a-z0-9/]{0,11}",
        module in proptest::option::of("[a-z][a-z0-9]{0,7}"),
        program in "[a-z][a-z0-9_]{0,15}",
        slang in slang_strategy(),
        stage in stage_strategy(),
        binary in any::<bool>(),
    ) {
        let cfg = config(&prefix, module);
        let first = paths::stage_path(&cfg, &program, slang, stage, binary);
        let second = paths::stage_path(&cfg, &program, slang, stage, binary);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn distinct_triples_never_collide(
        programs in proptest::collection::hash_set("[a-z][a-z0-9_]{0,15}", 1..8),
        module in proptest::option::of("[a-z][a-z0-9]{0,7}"),
        binary in any::<bool>(),
    ) {
        let cfg = config("out/shaders", module);

        let mut seen = HashSet::new();
        let mut triples = 0usize;
        for program in &programs {
            for slang in Slang::ALL {
                for stage in ShaderStage::ALL {
                    seen.insert(paths::stage_path(&cfg, program, slang, stage, binary));
                    triples += 1;
                }
            }
        }
        prop_assert_eq!(seen.len(), triples);
    }

    #[test]
    fn manifest_path_never_collides_with_a_stage_path(
        program in "[a-z][a-z0-9_]{0,15}",
        module in proptest::option::of("[a-z][a-z0-9]{0,7}"),
        slang in slang_strategy(),
        stage in stage_strategy(),
        binary in any::<bool>(),
    ) {
        let cfg = config("out/shaders", module);
        let manifest = paths::manifest_path(&cfg);
        let artifact = paths::stage_path(&cfg, &program, slang, stage, binary);
        prop_assert_ne!(manifest, artifact);
    }
}
