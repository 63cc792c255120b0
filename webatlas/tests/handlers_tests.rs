use webatlas::handlers::*;

#[test]
fn test_parse_seed_arg_bare_domain() {
    let result = parse_seed_arg("breq.dev");
    assert_eq!(result, Some("breq.dev".to_string()));
}

#[test]
fn test_parse_seed_arg_trims_whitespace() {
    let result = parse_seed_arg("  breq.dev  ");
    assert_eq!(result, Some("breq.dev".to_string()));
}

#[test]
fn test_parse_seed_arg_url_reduces_to_host() {
    let result = parse_seed_arg("https://breq.dev");
    assert_eq!(result, Some("breq.dev".to_string()));
}

#[test]
fn test_parse_seed_arg_url_with_path_reduces_to_host() {
    let result = parse_seed_arg("https://breq.dev/projects/webatlas");
    assert_eq!(result, Some("breq.dev".to_string()));
}

#[test]
fn test_parse_seed_arg_url_with_port() {
    let result = parse_seed_arg("http://localhost:3000/");
    assert_eq!(result, Some("localhost".to_string()));
}

#[test]
fn test_parse_seed_arg_empty() {
    assert_eq!(parse_seed_arg(""), None);
    assert_eq!(parse_seed_arg("   "), None);
}

#[test]
fn test_parse_seed_arg_rejects_paths_without_scheme() {
    assert_eq!(parse_seed_arg("breq.dev/about"), None);
}

#[test]
fn test_parse_seed_arg_rejects_embedded_whitespace() {
    assert_eq!(parse_seed_arg("not a domain"), None);
}

#[test]
fn test_parse_seed_arg_invalid_url() {
    assert_eq!(parse_seed_arg("https://"), None);
}

#[test]
fn test_expand_path_passes_plain_paths_through() {
    let path = expand_path("rooms.json");
    assert_eq!(path.to_str().unwrap(), "rooms.json");
}

#[test]
fn test_expand_path_expands_tilde() {
    let path = expand_path("~/graph.json");
    assert!(path.to_str().unwrap().ends_with("graph.json"));
}
