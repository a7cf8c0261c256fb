//! List models command handler

use crate::models::catalog;

pub fn cmd_list_models() {
    let models = catalog();

    println!("Available models ({} total)", models.len());
    println!("{:-<70}", "");

    for model in models {
        println!("{}", model.name);
        println!("  {}", model.description);
        println!("  Styles:      {}", model.supported_styles.join(", "));
        println!("  Limitations: {}", model.limitations.join(" "));
    }
}
