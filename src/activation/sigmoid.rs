/// Logistic activation: `1 / (1 + e^-x)`.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Derivative of the sigmoid expressed in terms of its *output*.
///
/// `y` must already be `sigmoid(x)`; passing a pre-activation value gives a
/// meaningless result.
pub fn sigmoid_derivative(y: f64) -> f64 {
    y * (1.0 - y)
}
