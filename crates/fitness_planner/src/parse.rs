use crate::types::PlanPayload;

/// Bind an extracted JSON object to the response type of one domain.
///
/// Fails on invalid syntax or when a required field is missing or has the
/// wrong type. Keys the type does not know are ignored.
pub fn parse_plan<P: PlanPayload>(json: &str) -> Result<P, serde_json::Error> {
    serde_json::from_str(json)
}
