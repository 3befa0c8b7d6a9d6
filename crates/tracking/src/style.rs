/// Map style URL for a persisted style preference id. Unknown ids fall back
/// to the street style.
pub fn style_url_for_id(id: &str) -> &'static str {
    match id {
        "satellite-style" => "mapbox://styles/mapbox/satellite-streets-v11",
        "dark-style" => "mapbox://styles/mapbox/dark-v10",
        _ => "mapbox://styles/mapbox/streets-v11",
    }
}
