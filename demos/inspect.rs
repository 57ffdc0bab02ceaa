fn main() {
    let args: Vec<String> = std::env::args().collect();
    let xml = if args.len() > 1 {
        std::fs::read_to_string(&args[1]).expect("Failed to read file")
    } else {
        concat!(
            r#"<message><t color="gold">Welcome, {{player}}!"#,
            r#"<t bold="true"> Click here<click action="open_url">http://example.com</click></t>"#,
            "</t></message>"
        )
        .to_string()
    };

    let mut variables = std::collections::HashMap::new();
    variables.insert("player".to_string(), "Steve".to_string());

    match jsonchat::xml_to_component_with(&xml, &variables) {
        Ok(component) => println!("{component:#?}"),
        Err(e) => eprintln!("Error: {e}"),
    }
}
