//! Provide traits for different classes of algorithms
//!

/// Fittable algorithms
///
/// A fittable algorithm takes a matrix and learns from it, producing a model which can then
/// transform further matrices. Hyperparameters are the receiver, the fitted model is returned.
pub trait Fit<R, E: std::error::Error> {
    type Object;

    fn fit(&self, records: &R) -> Result<Self::Object, E>;
}

/// Transformation algorithms
///
/// A transformer takes a matrix and maps it to a new representation, for example the normalized
/// interval a neural network is trained on.
pub trait Transformer<R, T> {
    fn transform(&self, x: R) -> T;
}

/// Inverse transformation
///
/// Maps a matrix from the transformed representation back into the original one, for example
/// the predictions of a neural network back into the units of the training data.
pub trait InverseTransformer<R, T> {
    fn inverse_transform(&self, x: R) -> T;
}
