use cavybreed::engines::genetics::{generate_random_genotype, GeneticCodec};
use cavybreed::{CavyError, GeneCatalog, Genotype};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn catalog() -> GeneCatalog {
    GeneCatalog::default_guinea_pig()
}

#[test]
fn test_encode_follows_catalog_order() {
    let catalog = catalog();
    let codec = GeneticCodec::new(&catalog);

    // Inserted out of order; catalog order is coat_color, hair_length, speed, endurance.
    let genotype = Genotype::new()
        .with("endurance", "e", "E")
        .with("coat_color", "O", "B")
        .with("speed", "F", "f");

    assert_eq!(
        codec.encode(&genotype).unwrap(),
        "coat_color:OB;speed:Ff;endurance:eE"
    );
}

#[test]
fn test_symbols_keep_caller_order() {
    let catalog = catalog();
    let codec = GeneticCodec::new(&catalog);

    let genotype = Genotype::new().with("hair_length", "h", "H");
    assert_eq!(codec.encode(&genotype).unwrap(), "hair_length:hH");
}

#[test]
fn test_round_trip_random_genotypes() {
    let catalog = catalog();
    let codec = GeneticCodec::new(&catalog);
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..200 {
        let genotype = generate_random_genotype(&catalog, None, &mut rng);
        let code = codec.encode(&genotype).unwrap();
        let decoded = codec.decode(&code).unwrap();

        assert_eq!(decoded, genotype);
        assert_eq!(codec.encode(&decoded).unwrap(), code);
    }
}

#[test]
fn test_empty_code_is_empty_genotype() {
    let catalog = catalog();
    let codec = GeneticCodec::new(&catalog);

    assert!(codec.decode("").unwrap().is_empty());
    assert_eq!(codec.encode(&Genotype::new()).unwrap(), "");
}

#[test]
fn test_malformed_codes_fail() {
    let catalog = catalog();
    let codec = GeneticCodec::new(&catalog);

    let malformed = [
        "coat_color:B",           // missing second symbol
        "coat_colorBO",           // missing separator
        "coat_color:BOW",         // too many symbols
        "fur:BB",                 // unknown gene
        "coat_color:BX",          // unknown symbol
        "speed:Ff;",              // trailing separator
        "speed:Ff; endurance:Ee", // whitespace
        "speed:Ff;speed:FF",      // duplicate gene
    ];

    for code in malformed {
        match codec.decode(code) {
            Err(CavyError::Decoding(_)) => {}
            other => panic!("expected decoding error for {:?}, got {:?}", code, other),
        }
    }
}

#[test]
fn test_encode_rejects_foreign_allele() {
    let catalog = catalog();
    let codec = GeneticCodec::new(&catalog);

    let wrong_allele = Genotype::new().with("speed", "F", "E");
    assert!(matches!(codec.encode(&wrong_allele), Err(CavyError::Encoding(_))));

    let unknown_gene = Genotype::new().with("wings", "W", "W");
    assert!(matches!(codec.encode(&unknown_gene), Err(CavyError::Encoding(_))));
}

#[test]
fn test_decode_with_phenotypes() {
    let catalog = catalog();
    let codec = GeneticCodec::new(&catalog);

    let decoded = codec
        .decode_with_phenotypes("coat_color:OW;hair_length:hh;speed:fF")
        .unwrap();

    assert_eq!(decoded.len(), 3);
    assert_eq!(decoded[0].trait_label, "Coat Color");
    assert_eq!(decoded[0].phenotype.label, "Orange");
    assert_eq!(decoded[1].phenotype.inheritance.as_str(), "homozygous");
    assert_eq!(decoded[1].phenotype.label, "Fluffy");
    assert_eq!(decoded[2].phenotype.label, "Fast");
    assert_eq!(decoded[2].phenotype.effect, 20.0);
}
