use console::style;
use miette::Result;

pub fn run() -> Result<()> {
    let listing = sprout::list_options();

    println!("{}", style("Templates").bold());
    for template in &listing.templates {
        println!(
            "  {:<12} {}",
            style(template.as_str()).cyan(),
            style(template.description()).dim()
        );
    }

    println!("\n{}", style("Licenses").bold());
    let licenses: Vec<&str> = listing.licenses.iter().map(|l| l.as_str()).collect();
    println!("  {} {}", licenses.join(", "), style("(default: mit)").dim());

    Ok(())
}
