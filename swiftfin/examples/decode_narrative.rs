//! Decodes a few narrative fields and rebuilds one of them.
//!
//! Run with `RUST_LOG=debug` to see how malformed lines are reclassified.

use swiftfin::prelude::*;
use swiftfin::resolver::{amount, currency};
use tracing::info;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .try_init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let samples = [
        ("72", "/RETN/\r\n//UNKNOWN BENEFICIARY\r\n/MREF/0511030094000014"),
        ("71D", "/OURC/B/EUR1,00Fees"),
        ("77B", "/ORDERRES/BE//MEILAAN 1, 9000 GENT"),
        ("75", "/3/PLEASE CONFIRM//REF 123"),
        ("70", "/ROC/INV 12345/URI/HTTP://EXAMPLE.COM"),
        ("72", "/AAAAAAAAA/NINE LETTER CODEWORD"),
    ];

    for (tag, value) in samples {
        let field = Field::from_tag(tag, Some(value))?;
        let Some(narrative) = field.narrative() else {
            continue;
        };
        info!("{} decoded into {} entries", field, narrative.structured.len());
        for entry in &narrative.structured {
            info!(
                codeword = %entry.codeword,
                narrative = ?entry.narrative_with(" "),
                currency = ?entry.currency,
                amount = ?entry.amount,
                country = ?entry.country,
                supplement = ?entry.supplement(),
                "entry"
            );
        }
        if let Some(text) = narrative.unstructured_with(" ") {
            info!(%text, "unstructured");
        }
        println!("{}", serde_json::to_string_pretty(&narrative)?);
    }

    let amount_field = Field::from_tag("32A", Some("091019EUR1234,56"))?;
    info!(
        amount = ?amount(&amount_field)?,
        currency = ?currency(&amount_field)?,
        "typed values"
    );

    let def = Dictionary::standard().require_field("72")?;
    let mut builder = NarrativeBuilder::for_field(def)
        .ok_or_else(|| anyhow::anyhow!("field 72 carries no narrative"))?;
    builder
        .add_codeword(
            "INS",
            "JOHN DOE HAS GONE TO AMSTERDAM AND FROM THERE HE GOES TO PARIS AND",
        )?
        .add_codeword("ACC", "PLEASE ADVISE")?;
    let field = builder.into_field(def);
    info!("rebuilt {} lines", field.line_count());
    println!("{}", field.wire_value().replace("\r\n", "\n"));
    Ok(())
}
