use cavybreed::config::{BreedingConfig, CombineRule, StatRule, StatRulesConfig};
use cavybreed::engines::genetics::{generate_random_genotype, StatDeriver};
use cavybreed::{Allele, Gene, GeneCatalog, Genotype};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_stats_stay_in_bounds_for_extreme_genotypes() {
    // Effects far beyond what the baseline can absorb.
    let catalog = GeneCatalog::new(vec![
        Gene::new(
            "speed",
            "Speed",
            vec![Allele::new("F", "Blazing", 2, 500.0), Allele::new("f", "Frozen", 1, -500.0)],
        ),
        Gene::new(
            "endurance",
            "Endurance",
            vec![Allele::new("E", "Tireless", 2, 500.0), Allele::new("e", "Drained", 1, -500.0)],
        ),
    ])
    .unwrap();
    let deriver =
        StatDeriver::new(&catalog, &StatRulesConfig::default(), &BreedingConfig::default()).unwrap();
    let mut rng = StdRng::seed_from_u64(99);

    let strong = Genotype::new().with("speed", "F", "F").with("endurance", "E", "e");
    let weak = Genotype::new().with("speed", "f", "f").with("endurance", "e", "e");

    for _ in 0..100 {
        let top = deriver.derive_stats(&strong, &mut rng).unwrap();
        assert_eq!(top.get("speed"), Some(100));
        assert_eq!(top.get("endurance"), Some(100));

        let bottom = deriver.derive_stats(&weak, &mut rng).unwrap();
        assert_eq!(bottom.get("speed"), Some(0));
        assert_eq!(bottom.get("endurance"), Some(0));
    }
}

#[test]
fn test_random_genotypes_give_bounded_stats() {
    let catalog = GeneCatalog::default_guinea_pig();
    let deriver =
        StatDeriver::new(&catalog, &StatRulesConfig::default(), &BreedingConfig::default()).unwrap();
    let mut rng = StdRng::seed_from_u64(5);

    for _ in 0..300 {
        let genotype = generate_random_genotype(&catalog, None, &mut rng);
        let stats = deriver.derive_stats(&genotype, &mut rng).unwrap();
        for (_, value) in stats.iter() {
            assert!(value <= 100);
        }
        // Genetics move speed by at most 14 and noise by at most 5.
        let speed = stats.get("speed").unwrap();
        assert!((31..=69).contains(&speed), "speed = {}", speed);
    }
}

#[test]
fn test_stats_draw_independent_offsets() {
    // Two stats fed by the same gene differ only through their noise draws.
    let catalog = GeneCatalog::default_guinea_pig();
    let rules = StatRulesConfig {
        version: 1,
        rules: vec![
            StatRule::new("speed", &["speed"], CombineRule::Sum),
            StatRule::new("agility", &["speed"], CombineRule::Sum),
        ],
    };
    let deriver = StatDeriver::new(&catalog, &rules, &BreedingConfig::default()).unwrap();
    let genotype = Genotype::new().with("speed", "F", "f");
    let mut rng = StdRng::seed_from_u64(17);

    let differing = (0..50)
        .map(|_| deriver.derive_stats(&genotype, &mut rng).unwrap())
        .filter(|stats| stats.get("speed") != stats.get("agility"))
        .count();
    assert!(differing > 0);
}

#[test]
fn test_genes_absent_from_genotype_leave_baseline() {
    let catalog = GeneCatalog::default_guinea_pig();
    let config = BreedingConfig {
        noise_range: 0,
        ..BreedingConfig::default()
    };
    let deriver = StatDeriver::new(&catalog, &StatRulesConfig::default(), &config).unwrap();
    let genotype = Genotype::new().with("coat_color", "B", "B");

    let stats = deriver.derive_stats(&genotype, &mut StdRng::seed_from_u64(0)).unwrap();
    assert_eq!(stats.get("speed"), Some(50));
    assert_eq!(stats.get("endurance"), Some(50));
    assert_eq!(stats.genetic_score(), 50.0);
}

#[test]
fn test_co_dominant_effect_is_averaged() {
    let catalog = GeneCatalog::new(vec![Gene::new(
        "speed",
        "Speed",
        vec![Allele::new("A", "Quick", 1, 20.0), Allele::new("B", "Steady", 1, 0.0)],
    )])
    .unwrap();
    let config = BreedingConfig {
        noise_range: 0,
        ..BreedingConfig::default()
    };
    let rules = StatRulesConfig {
        version: 1,
        rules: vec![StatRule::new("speed", &["speed"], CombineRule::Sum)],
    };
    let deriver = StatDeriver::new(&catalog, &rules, &config).unwrap();

    let stats = deriver
        .derive_stats(&Genotype::new().with("speed", "A", "B"), &mut StdRng::seed_from_u64(0))
        .unwrap();
    // 50 + 10 * 0.7
    assert_eq!(stats.get("speed"), Some(57));
}
