use chrono::NaiveDate;
use fatoura::core::*;
use fatoura::render::{AmountFormatter, CurrencyFormatter, TotalsSummary};
use rust_decimal_macros::dec;

fn main() {
    let mut numbers = DocumentNumberSequence::starting_at(DocumentKind::Invoice, 2024, 41);
    let issue_date = NaiveDate::from_ymd_opt(2024, 9, 30).unwrap();

    // Sale invoice with FODEC and timbre fiscal
    let invoice = DocumentBuilder::new(DocumentKind::Invoice, numbers.next_for_date(issue_date), issue_date)
        .due_date(NaiveDate::from_ymd_opt(2024, 10, 30).unwrap())
        .party(
            Party::new("Société Méditerranée SARL")
                .tax_id("1234567A/M/000")
                .address("Rue de Marseille 12, 1000 Tunis"),
        )
        .add_line(
            LineItemBuilder::new("Écran 24 pouces", dec!(4), dec!(450.000))
                .reference("ECR-24")
                .unit("pièce")
                .vat(dec!(19))
                .discount(dec!(5))
                .build(),
        )
        .add_line(
            LineItemBuilder::new("Installation", dec!(3), dec!(35.000))
                .unit("heure")
                .vat(dec!(7))
                .build(),
        )
        .add_line(LineItemBuilder::new("Manuel utilisateur", dec!(4), dec!(12.500)).build())
        .global_discount(dec!(2))
        .fodec(true)
        .stamp_duty(true)
        .note("Paiement par virement à 30 jours")
        .build_checked()
        .expect("invoice should be valid");

    println!("{}: {}", invoice.kind.title(), invoice.number);
    println!("Date:   {}", invoice.issue_date);
    println!("Client: {}", invoice.party.name);
    println!("---");
    let formatter = AmountFormatter::default();
    for line in &invoice.lines {
        println!(
            "  {} x {} @ {} = {}",
            line.quantity,
            line.designation,
            formatter.format(line.unit_price),
            formatter.format(compute_line_total(line))
        );
    }
    println!("---");
    println!("{}", TotalsSummary::for_document(&invoice, &formatter));

    println!("---");
    println!("Next number: {}", numbers.peek());
}
