use tower_lsp_server::lsp_types::{GotoDefinitionResponse, Location, Position};

/// Splits a fixture on its `$0` cursor marker, returning the content
/// without the marker and the marker's position.
pub fn parse_fixture(fixture: &str) -> (String, Position) {
    let mut content = String::new();
    let mut position = Position::default();
    let mut found = false;

    for (line_num, line) in fixture.lines().enumerate() {
        if let Some(col) = line.find("$0") {
            if found {
                panic!("fixture must contain exactly one $0 cursor marker");
            }
            position.line = line_num as u32;
            position.character = col as u32;
            content.push_str(&line.replace("$0", ""));
            found = true;
        } else {
            content.push_str(line);
        }
        content.push('\n');
    }

    if !found {
        panic!("fixture must contain a $0 cursor marker");
    }

    // Remove the last newline
    content.pop();

    (content, position)
}

pub fn single_location(response: Option<GotoDefinitionResponse>) -> Location {
    match response {
        Some(GotoDefinitionResponse::Scalar(location)) => location,
        other => panic!("expected a single location, got {other:?}"),
    }
}
