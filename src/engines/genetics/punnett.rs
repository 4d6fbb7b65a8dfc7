use crate::types::AllelePair;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One collapsed genotype bucket of a cross.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenotypeProbability {
    /// Order-independent genotype, see [`AllelePair::canonical`].
    pub genotype: String,
    pub count: u32,
    /// Integer percentage; all buckets of a cross sum to 100.
    pub percent: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PunnettResult {
    /// `grid[i][j]` pairs parent 1 allele `i` with parent 2 allele `j`.
    pub grid: [[AllelePair; 2]; 2],
    /// The four raw combinations, row-major. Sampling draws from these.
    pub combinations: [AllelePair; 4],
    /// Distinct genotypes in first-seen order.
    pub probabilities: Vec<GenotypeProbability>,
}

impl PunnettResult {
    pub fn probability(&self, genotype: &str) -> Option<u32> {
        self.probabilities
            .iter()
            .find(|p| p.genotype == genotype)
            .map(|p| p.percent)
    }

    pub fn possible_offspring(&self) -> Vec<&str> {
        self.probabilities.iter().map(|p| p.genotype.as_str()).collect()
    }

    /// Draw one of the four raw combinations, each with probability 1/4.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> &AllelePair {
        &self.combinations[rng.gen_range(0..self.combinations.len())]
    }
}

/// 2x2 cross of two parental allele pairs for the same gene.
pub fn calculate(parent1: &AllelePair, parent2: &AllelePair) -> PunnettResult {
    let grid = [
        [
            AllelePair::new(&parent1.first, &parent2.first),
            AllelePair::new(&parent1.first, &parent2.second),
        ],
        [
            AllelePair::new(&parent1.second, &parent2.first),
            AllelePair::new(&parent1.second, &parent2.second),
        ],
    ];
    let combinations = [
        grid[0][0].clone(),
        grid[0][1].clone(),
        grid[1][0].clone(),
        grid[1][1].clone(),
    ];

    let mut buckets: Vec<(String, u32)> = Vec::new();
    for combination in &combinations {
        let key = combination.canonical();
        match buckets.iter_mut().find(|(genotype, _)| *genotype == key) {
            Some((_, count)) => *count += 1,
            None => buckets.push((key, 1)),
        }
    }

    let counts: Vec<u32> = buckets.iter().map(|(_, count)| *count).collect();
    let percents = percentages(&counts);
    let probabilities = buckets
        .into_iter()
        .zip(percents)
        .map(|((genotype, count), percent)| GenotypeProbability { genotype, count, percent })
        .collect();

    PunnettResult { grid, combinations, probabilities }
}

/// Round each share to a whole percent, then hand any rounding remainder
/// to the largest bucket so the total is exactly 100.
fn percentages(counts: &[u32]) -> Vec<u32> {
    let total: u32 = counts.iter().sum();
    if total == 0 {
        return vec![0; counts.len()];
    }

    let mut percents: Vec<i64> = counts
        .iter()
        .map(|&c| ((c as f64 / total as f64) * 100.0).round() as i64)
        .collect();

    let remainder = 100 - percents.iter().sum::<i64>();
    if remainder != 0 {
        let largest = counts
            .iter()
            .enumerate()
            .max_by(|(ia, a), (ib, b)| a.cmp(b).then(ib.cmp(ia)))
            .map(|(i, _)| i)
            .unwrap_or(0);
        percents[largest] += remainder;
    }

    percents.into_iter().map(|p| p.max(0) as u32).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_order() {
        let result = calculate(&AllelePair::new("B", "b"), &AllelePair::new("B", "w"));
        assert_eq!(result.grid[0][1], AllelePair::new("B", "w"));
        assert_eq!(result.grid[1][0], AllelePair::new("b", "B"));
        assert_eq!(result.combinations[3], AllelePair::new("b", "w"));
    }

    #[test]
    fn test_result_needs_all_four_combinations() {
        let result = calculate(&AllelePair::new("F", "f"), &AllelePair::new("F", "f"));
        let mut value = serde_json::to_value(&result).unwrap();
        assert_eq!(serde_json::from_value::<PunnettResult>(value.clone()).unwrap(), result);

        value["combinations"] = serde_json::json!([]);
        assert!(serde_json::from_value::<PunnettResult>(value).is_err());
    }

    #[test]
    fn test_percentages_fix_rounding_drift() {
        // 1/3 each rounds to 33 three times; the remainder goes to the first largest.
        assert_eq!(percentages(&[1, 1, 1]), vec![34, 33, 33]);
        assert_eq!(percentages(&[1, 2, 1]), vec![25, 50, 25]);
        assert_eq!(percentages(&[4]), vec![100]);
    }
}
