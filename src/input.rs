use crate::error::InputError;

pub fn parse_value(raw: &str) -> Result<i64, InputError> {
    let trimmed = raw.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))
}

pub fn parse_label(raw: &str) -> Result<String, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::EmptyLabel);
    }
    if !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(InputError::InvalidLabel(trimmed.to_string()));
    }
    Ok(trimmed.to_ascii_uppercase())
}

pub fn parse_weight(raw: &str) -> Result<u32, InputError> {
    let trimmed = raw.trim();
    match trimmed.parse::<u32>() {
        Ok(w) if w > 0 => Ok(w),
        _ => Err(InputError::InvalidWeight(trimmed.to_string())),
    }
}

/// Parse an edge written as `FROM-TO:WEIGHT`, e.g. `a-b:4`.
pub fn parse_edge(raw: &str) -> Result<(String, String, u32), InputError> {
    let malformed = || InputError::MalformedEdge(raw.trim().to_string());

    let (ends, weight) = raw.split_once(':').ok_or_else(malformed)?;
    let (from, to) = ends.split_once('-').ok_or_else(malformed)?;

    Ok((parse_label(from)?, parse_label(to)?, parse_weight(weight)?))
}

/// Parse a comma-separated list of tree values, e.g. `50, 30, 70`.
pub fn parse_value_list(raw: &str) -> Result<Vec<i64>, InputError> {
    raw.split(',')
        .filter(|part| !part.trim().is_empty())
        .map(parse_value)
        .collect()
}
