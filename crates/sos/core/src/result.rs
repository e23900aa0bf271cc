//! Dispatch result aggregation.

use crate::MulticastResponse;

/// Aggregate outcome of one dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchResult {
    pub success_count: usize,
    pub failure_count: usize,
}

impl DispatchResult {
    /// Reduce a provider response for a send to `expected` tokens.
    ///
    /// Fails if the response does not account for exactly `expected` tokens.
    pub fn aggregate(
        response: &MulticastResponse,
        expected: usize,
    ) -> color_eyre::eyre::Result<Self> {
        let result = match response {
            MulticastResponse::PerToken(outcomes) => {
                if outcomes.len() != expected {
                    color_eyre::eyre::bail!(
                        "provider returned {} outcomes for {} tokens",
                        outcomes.len(),
                        expected
                    );
                }

                let success_count = outcomes.iter().filter(|o| o.is_success()).count();
                Self {
                    success_count,
                    failure_count: outcomes.len() - success_count,
                }
            }
            MulticastResponse::Aggregate {
                success_count,
                failure_count,
            } => Self {
                success_count: *success_count,
                failure_count: *failure_count,
            },
        };

        let total = result
            .checked_total()
            .ok_or_else(|| color_eyre::eyre::eyre!("provider counts overflow"))?;

        if total != expected {
            color_eyre::eyre::bail!(
                "provider counts {} + {} do not match {} tokens",
                result.success_count,
                result.failure_count,
                expected
            );
        }

        Ok(result)
    }

    /// Total number of tokens accounted for, or `None` on overflow.
    pub fn checked_total(&self) -> Option<usize> {
        self.success_count.checked_add(self.failure_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SendOutcome;

    #[test]
    fn test_aggregate_per_token() {
        let response = MulticastResponse::PerToken(vec![
            SendOutcome::delivered(Some("m1".to_string())),
            SendOutcome::failed("BadDeviceToken"),
            SendOutcome::delivered(None),
        ]);

        let result = DispatchResult::aggregate(&response, 3).unwrap();
        assert_eq!(result.success_count, 2);
        assert_eq!(result.failure_count, 1);
    }

    #[test]
    fn test_aggregate_misaligned() {
        let response = MulticastResponse::PerToken(vec![SendOutcome::delivered(None)]);
        assert!(DispatchResult::aggregate(&response, 2).is_err());
    }

    #[test]
    fn test_aggregate_counts_passed_through() {
        let response = MulticastResponse::Aggregate {
            success_count: 4,
            failure_count: 1,
        };
        let result = DispatchResult::aggregate(&response, 5).unwrap();
        assert_eq!(result.success_count, 4);
        assert_eq!(result.failure_count, 1);

        assert!(DispatchResult::aggregate(&response, 6).is_err());
    }

    #[test]
    fn test_aggregate_overflowing_counts() {
        let response = MulticastResponse::Aggregate {
            success_count: usize::MAX,
            failure_count: 1,
        };
        assert!(DispatchResult::aggregate(&response, 0).is_err());
    }

    #[test]
    fn test_serializes_camel_case() {
        let result = DispatchResult {
            success_count: 2,
            failure_count: 1,
        };
        assert_eq!(
            serde_json::to_value(result).unwrap(),
            serde_json::json!({ "successCount": 2, "failureCount": 1 })
        );
    }
}
