//! Recovering a JSON object from model output.
//!
//! Schema-constrained responses are usually bare JSON, but models still wrap the
//! object in a markdown fence or surround it with prose now and then.

/// Extract the first JSON object from a response.
///
/// Tries a fenced code block first, then the first balanced `{ ... }` span.
///
/// # Examples
///
/// ```
/// use lumiere_models::extract_json;
///
/// let response = "Here is the scene:\n```json\n{\"scene_summary\": \"dawn\"}\n```";
/// assert_eq!(extract_json(response).as_deref(), Some("{\"scene_summary\": \"dawn\"}"));
/// assert_eq!(extract_json("no json here"), None);
/// ```
pub fn extract_json(response: &str) -> Option<String> {
    if let Some(fenced) = extract_from_code_block(response)
        && fenced.starts_with('{')
    {
        return Some(fenced);
    }

    let extracted = extract_balanced(response, '{', '}');
    if extracted.is_none() {
        tracing::debug!(
            response_length = response.len(),
            "No JSON object found in response"
        );
    }
    extracted
}

/// Content of the first ``` fence, with any language tag skipped.
fn extract_from_code_block(response: &str) -> Option<String> {
    let start = response.find("```")? + 3;
    let body_start = response[start..]
        .find('\n')
        .map(|n| start + n + 1)
        .unwrap_or(start);

    let body = match response[body_start..].find("```") {
        Some(end) => &response[body_start..body_start + end],
        // Truncated response; take everything after the fence.
        None => &response[body_start..],
    };
    Some(body.trim().to_string())
}

/// Span from the first `open` to its matching `close`, skipping string contents.
fn extract_balanced(response: &str, open: char, close: char) -> Option<String> {
    let start = response.find(open)?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, ch) in response[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match ch {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            c if c == open && !in_string => depth += 1,
            c if c == close && !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(response[start..start + i + ch.len_utf8()].to_string());
                }
            }
            _ => {}
        }
    }

    None
}
