use std::path::Path;

fn main() {
    let config_path = Path::new("configs/required_avus.txt");
    validate_config_file(config_path);
    set_build_dependencies();
}

fn validate_config_file(config_path: &Path) {
    // Ensure config exists at build time
    assert!(
        config_path.exists(),
        "\n\nCONFIG BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the default required-frequency table before building.\n",
        config_path.display()
    );

    let contents = std::fs::read_to_string(config_path).unwrap_or_else(|e| {
        panic!(
            "\n\nCONFIG BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            config_path.display()
        );
    });

    let rules = validate_rules(&contents);

    assert!(
        rules > 0,
        "\n\nCONFIG BUILD ERROR: No rules found\n\
         Path: {}\n\
         The default table must list at least one '<attribute> <frequency>' line.\n",
        config_path.display()
    );

    println!("cargo:warning=Validated default config: {rules} required attributes");
}

fn validate_rules(contents: &str) -> usize {
    let mut rules = 0;

    for (i, line) in contents.lines().enumerate() {
        let line_num = i + 1;
        let tokens: Vec<&str> = line.split_whitespace().collect();

        assert!(
            tokens.len() == 2,
            "\n\nCONFIG BUILD ERROR: Line {line_num} has {} tokens, expected 2\n\
             Line: '{line}'\n",
            tokens.len()
        );

        assert!(
            tokens[1].parse::<usize>().is_ok(),
            "\n\nCONFIG BUILD ERROR: Line {line_num} frequency '{}' is not a non-negative integer\n",
            tokens[1]
        );

        rules += 1;
    }

    rules
}

fn set_build_dependencies() {
    // Tell cargo to rerun if the default config changes
    println!("cargo:rerun-if-changed=configs/required_avus.txt");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
