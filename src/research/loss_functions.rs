use crate::{Classifier, Sample};


/// Returns the fraction of examples in `sample` misclassified by `f`.
/// An empty sample has zero loss.
pub fn zero_one_loss<H>(sample: &Sample, f: &H) -> f64
    where H: Classifier
{
    let n_sample = sample.shape().0;
    if n_sample == 0 { return 0f64; }

    let target = sample.target();

    f.predict_all(sample)
        .into_iter()
        .zip(target)
        .map(|(fx, &y)| if fx as f64 != y { 1f64 } else { 0f64 })
        .sum::<f64>()
        / n_sample as f64
}
