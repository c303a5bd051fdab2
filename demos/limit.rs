use golf::OptionRegistry;

fn main() {
    let mut registry = OptionRegistry::new();
    let limit = registry.integer(Some('l'), Some("limit"), 0, "limit results");
    let verbose = registry.boolean(Some('v'), Some("verbose"), false, "print verbose info");
    let servers = registry.string(Some('s'), Some("servers"), "", "ask servers");

    if let Err(error) = registry.parse_env() {
        eprintln!("Parse error: {error}");
        std::process::exit(1);
    }

    println!("limit: {}", limit.get());
    println!("verbose: {}", verbose.get());
    println!("servers: {}", servers.get());
    println!("arguments: {:?}", registry.args());
}
