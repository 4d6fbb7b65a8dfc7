use crate::types::{Allele, Gene};

/// The four-gene guinea pig catalog the game ships with.
///
/// `coat_color` has three alleles with strict dominance B > O > W; the other
/// genes are classic dominant/recessive pairs.
pub fn guinea_pig_genes() -> Vec<Gene> {
    vec![
        Gene::new(
            "coat_color",
            "Coat Color",
            vec![
                Allele::new("B", "Brown", 3, 20.0),
                Allele::new("O", "Orange", 2, 10.0),
                Allele::new("W", "White", 1, 0.0),
            ],
        )
        .with_description("Determines guinea pig coat color with 3 possible colors"),
        Gene::new(
            "hair_length",
            "Hair Length",
            vec![
                Allele::new("H", "Short", 2, 5.0),
                Allele::new("h", "Fluffy", 1, 15.0),
            ],
        )
        .with_description("Determines hair length (short vs fluffy/long)"),
        Gene::new(
            "speed",
            "Movement Speed",
            vec![
                Allele::new("F", "Fast", 2, 20.0),
                Allele::new("f", "Slow", 1, -20.0),
            ],
        )
        .with_description("Affects movement speed and agility"),
        Gene::new(
            "endurance",
            "Energy Level",
            vec![
                Allele::new("E", "Energetic", 2, 20.0),
                Allele::new("e", "Lazy", 1, -20.0),
            ],
        )
        .with_description("Affects endurance and stamina"),
    ]
}
