/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Standard field grammars.
//!
//! Each field kind is data: a segment layout, a component type pattern and,
//! for narrative fields, the layout its codewords follow. Option-letter
//! variants that share a structure share the segment slices.

use crate::schema::{CodewordCharset, FieldDef, NarrativeLayout, Segment};

const MT_AND_DATE: &[Segment] = &[
    Segment::Fixed(3),
    Segment::Newline,
    Segment::Fixed(6),
    Segment::Newline,
    Segment::Fixed(4),
    Segment::Rest,
];
const SINGLE: &[Segment] = &[Segment::Rest];
const AMOUNT: &[Segment] = &[Segment::Number];
const CURRENCY_AMOUNT: &[Segment] = &[Segment::Alpha(3), Segment::Number];
const DATE_CURRENCY_AMOUNT: &[Segment] =
    &[Segment::Fixed(6), Segment::Alpha(3), Segment::Number];
const QUALIFIED: &[Segment] = &[Segment::Qualified];
const PARTY_IDENTIFIER: &[Segment] = &[Segment::Account, Segment::Rest];
const PARTY_NAME_ADDRESS: &[Segment] = &[Segment::Account, Segment::Lines(4)];
const LINES_3: &[Segment] = &[Segment::Lines(3)];
const LINES_4: &[Segment] = &[Segment::Lines(4)];
const LINES_6: &[Segment] = &[Segment::Lines(6)];
const LINES_20: &[Segment] = &[Segment::Lines(20)];
const LINES_35: &[Segment] = &[Segment::Lines(35)];

/// 11R: MT and date of the original message, received.
pub static FIELD_11R: FieldDef = FieldDef::new(
    "11R",
    "MT and Date of the Original Message",
    MT_AND_DATE,
    "NDNN",
);
/// 11S: MT and date of the original message, sent.
pub static FIELD_11S: FieldDef = FieldDef::new(
    "11S",
    "MT and Date of the Original Message",
    MT_AND_DATE,
    "NDNN",
);
/// 19: sum of amounts.
pub static FIELD_19: FieldDef = FieldDef::new("19", "Sum of Amounts", AMOUNT, "I");
/// 20: transaction reference.
pub static FIELD_20: FieldDef = FieldDef::new("20", "Transaction Reference", SINGLE, "S");
/// 20C: generic reference.
pub static FIELD_20C: FieldDef = FieldDef::new("20C", "Reference", QUALIFIED, "SSS");
/// 21: related reference.
pub static FIELD_21: FieldDef = FieldDef::new("21", "Related Reference", SINGLE, "S");
/// 22F: generic indicator.
pub static FIELD_22F: FieldDef = FieldDef::new("22F", "Indicator", QUALIFIED, "SSS");
/// 30: date.
pub static FIELD_30: FieldDef = FieldDef::new("30", "Date", &[Segment::Fixed(6)], "D");
/// 30T: trade date.
pub static FIELD_30T: FieldDef = FieldDef::new("30T", "Trade Date", &[Segment::Fixed(8)], "E");
/// 32A: value date, currency and interbank settled amount.
pub static FIELD_32A: FieldDef = FieldDef::new(
    "32A",
    "Value Date/Currency/Interbank Settled Amount",
    DATE_CURRENCY_AMOUNT,
    "DCI",
);
/// 32B: currency and amount.
pub static FIELD_32B: FieldDef = FieldDef::new("32B", "Currency/Amount", CURRENCY_AMOUNT, "CI");
/// 33B: currency and instructed amount.
pub static FIELD_33B: FieldDef = FieldDef::new(
    "33B",
    "Currency/Instructed Amount",
    CURRENCY_AMOUNT,
    "CI",
);
/// 50K: ordering customer.
pub static FIELD_50K: FieldDef = FieldDef::new(
    "50K",
    "Ordering Customer",
    PARTY_NAME_ADDRESS,
    "SSSSS",
);
/// 52A: ordering institution.
pub static FIELD_52A: FieldDef = FieldDef::new(
    "52A",
    "Ordering Institution",
    PARTY_IDENTIFIER,
    "SB",
);
/// 56A: intermediary institution.
pub static FIELD_56A: FieldDef = FieldDef::new(
    "56A",
    "Intermediary Institution",
    PARTY_IDENTIFIER,
    "SB",
);
/// 57A: account with institution.
pub static FIELD_57A: FieldDef = FieldDef::new(
    "57A",
    "Account With Institution",
    PARTY_IDENTIFIER,
    "SB",
);
/// 58A: beneficiary institution.
pub static FIELD_58A: FieldDef = FieldDef::new(
    "58A",
    "Beneficiary Institution",
    PARTY_IDENTIFIER,
    "SB",
);
/// 59: beneficiary customer.
pub static FIELD_59: FieldDef = FieldDef::new(
    "59",
    "Beneficiary Customer",
    PARTY_NAME_ADDRESS,
    "SSSSS",
);
/// 70: remittance information.
pub static FIELD_70: FieldDef = FieldDef::new("70", "Remittance Information", LINES_4, "SSSS")
    .with_narrative(NarrativeLayout::CodewordPairs);
/// 71B: details of charges.
pub static FIELD_71B: FieldDef = FieldDef::new("71B", "Details of Charges", LINES_6, "SSSSSS")
    .with_narrative(NarrativeLayout::CodewordAmount { bank_code: false });
/// 71D: charges, with the bank code letter used in corporate trade messages.
pub static FIELD_71D: FieldDef = FieldDef::new("71D", "Charges", LINES_6, "SSSSSS")
    .with_narrative(NarrativeLayout::CodewordAmount { bank_code: true });
/// 71F: sender's charges.
pub static FIELD_71F: FieldDef = FieldDef::new("71F", "Sender's Charges", CURRENCY_AMOUNT, "CI");
/// 71G: receiver's charges.
pub static FIELD_71G: FieldDef = FieldDef::new("71G", "Receiver's Charges", CURRENCY_AMOUNT, "CI");
/// 72: sender to receiver information.
pub static FIELD_72: FieldDef = FieldDef::new(
    "72",
    "Sender to Receiver Information",
    LINES_6,
    "SSSSSS",
)
.with_narrative(NarrativeLayout::CodewordNarrative {
    charset: CodewordCharset::Alphanumeric,
});
/// 75: queries.
pub static FIELD_75: FieldDef = FieldDef::new("75", "Queries", LINES_6, "SSSSSS")
    .with_narrative(NarrativeLayout::QueryNumber);
/// 76: answers.
pub static FIELD_76: FieldDef = FieldDef::new("76", "Answers", LINES_6, "SSSSSS")
    .with_narrative(NarrativeLayout::QueryNumber);
/// 77A: narrative.
pub static FIELD_77A: FieldDef = FieldDef::new("77A", "Narrative", LINES_20, "")
    .with_narrative(NarrativeLayout::Unstructured);
/// 77B: regulatory reporting.
pub static FIELD_77B: FieldDef = FieldDef::new("77B", "Regulatory Reporting", LINES_3, "SSS")
    .with_narrative(NarrativeLayout::CodewordCountry);
/// 79: narrative, fifty characters per line.
pub static FIELD_79: FieldDef = FieldDef::new("79", "Narrative", LINES_35, "")
    .with_narrative(NarrativeLayout::Unstructured)
    .with_line_width(50);
/// 86: information to account owner.
pub static FIELD_86: FieldDef = FieldDef::new(
    "86",
    "Information to Account Owner",
    LINES_6,
    "SSSSSS",
)
.with_narrative(NarrativeLayout::Unstructured)
.with_line_width(65);

/// Every standard field grammar.
pub static ALL: [&FieldDef; 30] = [
    &FIELD_11R, &FIELD_11S, &FIELD_19, &FIELD_20, &FIELD_20C, &FIELD_21, &FIELD_22F, &FIELD_30,
    &FIELD_30T, &FIELD_32A, &FIELD_32B, &FIELD_33B, &FIELD_50K, &FIELD_52A, &FIELD_56A,
    &FIELD_57A, &FIELD_58A, &FIELD_59, &FIELD_70, &FIELD_71B, &FIELD_71D, &FIELD_71F,
    &FIELD_71G, &FIELD_72, &FIELD_75, &FIELD_76, &FIELD_77A, &FIELD_77B, &FIELD_79, &FIELD_86,
];
