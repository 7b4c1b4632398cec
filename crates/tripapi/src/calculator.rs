use serde::{Deserialize, Serialize};

/// Two operands to add
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SumRequest {
    pub value1: f64,
    pub value2: f64,
}

/// Result of a sum
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SumResponse {
    pub value3: f64,
}

/// Add the two operands.
///
/// Plain IEEE-754 addition: NaN and infinities propagate as they would for
/// any other `f64` arithmetic.
pub fn compute_sum(request: SumRequest) -> SumResponse {
    SumResponse {
        value3: request.value1 + request.value2,
    }
}
