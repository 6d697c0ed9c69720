/// Case- and whitespace-insensitive region pre-filter. No requested state
/// means no filtering; a plan with no region only matches when nothing was
/// requested.
pub fn matches(request_state: Option<&str>, plan_region: Option<&str>) -> bool {
    let Some(state) = request_state else {
        return true;
    };

    let state = state.trim().to_uppercase();
    let region = plan_region.unwrap_or("").trim().to_uppercase();
    region.contains(&state)
}
