/// Divides a weighted sum by its total weight. Returns 0.0 when nothing was
/// weighted.
pub fn weighted_average(weighted_sum: f64, total_weight: f64) -> f64 {
    if total_weight == 0.0 {
        return 0.0;
    }
    weighted_sum / total_weight
}
