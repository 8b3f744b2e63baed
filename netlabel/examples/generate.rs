//! Generate descriptors and vendor commands from the command line.
//!
//! Fields are passed as `field-id=value` pairs using the same ids as the
//! presentation layer.
//!
//! # Usage
//!
//! ```bash
//! # SNMP location for a Cisco device
//! cargo run --example generate -- --vendor cisco --category snmp \
//!     snmp-org=CORP-UN01 snmp-lat=-23.5 snmp-long=-46.633
//!
//! # Every category at once, as JSON
//! cargo run --example generate -- --vendor juniper --json \
//!     vlan-finality=DATA vlan-id=5000 if-local=ge-0/0/1 if-type=UPLINK
//! ```

use std::env;

use netlabel::{Category, Engine, Event, FieldId, FieldMap, MemoryFields};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (set RUST_LOG=debug for verbose output)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse()?;

    let engine = Engine::new();
    let mut fields = MemoryFields::new();
    if let Some(vendor) = &args.vendor {
        fields.write(FieldId::VendorSelect, vendor);
    }
    for (id, value) in &args.fields {
        fields.write(*id, value);
    }

    // Simulate the user leaving every field, so coordinates get formatted
    // and the organization code validated.
    for (id, _) in &args.fields {
        engine.handle(&mut fields, Event::input(*id));
        engine.handle(&mut fields, Event::commit(*id));
    }

    let categories: Vec<Category> = match args.category {
        Some(category) => vec![category],
        None => Category::ALL.to_vec(),
    };

    let mut results = Vec::new();
    for category in categories {
        results.push((category, engine.generate(category, &mut fields)));
    }

    if fields.has_error(FieldId::SnmpOrg) {
        log::warn!(
            "Organization code '{}' does not match ORG-UNIT",
            fields.read(FieldId::SnmpOrg)
        );
    }

    if args.json {
        let mut map = serde_json::Map::new();
        for (category, output) in &results {
            map.insert(category.to_string(), serde_json::to_value(output)?);
        }
        println!("{}", serde_json::to_string_pretty(&map)?);
        return Ok(());
    }

    for (category, output) in &results {
        println!("=== {} ===", category);
        println!("{}", output.final_output);
        println!();
        println!("--- session ---");
        println!("{}", output.context_output);
        println!();
    }

    Ok(())
}

struct Args {
    vendor: Option<String>,
    category: Option<Category>,
    json: bool,
    fields: Vec<(FieldId, String)>,
}

impl Args {
    fn parse() -> Result<Self, netlabel::Error> {
        let args: Vec<String> = env::args().collect();

        let mut vendor = None;
        let mut category = None;
        let mut json = false;
        let mut fields = Vec::new();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--vendor" | "-v" => {
                    i += 1;
                    if i < args.len() {
                        vendor = Some(args[i].clone());
                    }
                }
                "--category" | "-c" => {
                    i += 1;
                    if i < args.len() {
                        category = Some(args[i].parse()?);
                    }
                }
                "--json" => json = true,
                "--help" | "-h" => {
                    Self::print_help();
                    std::process::exit(0);
                }
                pair => match pair.split_once('=') {
                    Some((id, value)) => fields.push((id.parse()?, value.to_string())),
                    None => eprintln!("Unknown argument: {}", pair),
                },
            }
            i += 1;
        }

        Ok(Self {
            vendor,
            category,
            json,
            fields,
        })
    }

    fn print_help() {
        println!(
            r#"netlabel generate example

USAGE:
    cargo run --example generate -- [OPTIONS] [FIELD=VALUE]...

OPTIONS:
    -v, --vendor <VENDOR>      huawei, extreme, juniper or cisco [default: none]
    -c, --category <NAME>      snmp, vlan or if [default: all]
    --json                     Print outputs as JSON
    -h, --help                 Print this help message

FIELDS:
    snmp-org snmp-lat snmp-long
    vlan-finality vlan-inst vlan-service vlan-oper vlan-id
    if-local if-type if-remote-org if-remote-equip if-remote-if
    if-service if-internal-id if-bandwidth if-comment

EXAMPLES:
    # Interface description for a Huawei switch
    cargo run --example generate -- -v huawei -c if \
        if-local=GE0/0/1 if-type=UPLINK if-remote-org=acme-br if-remote-equip=sw01
"#
        );
    }
}
