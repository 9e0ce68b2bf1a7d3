use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::numeric::lenient_decimal;

/// FODEC levy rate applied to the pre-tax total (1%).
pub const FODEC_RATE: Decimal = dec!(0.01);

/// Flat timbre fiscal (stamp duty) per document, in dinars.
pub const STAMP_DUTY_AMOUNT: Decimal = dec!(1.000);

/// One product/quantity/price row of a commercial document.
///
/// Numeric fields decode leniently: `null`, missing values and unparsable
/// strings become zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Product reference (code article).
    #[serde(default)]
    pub reference: Option<String>,
    /// Item designation as printed on the document.
    #[serde(default)]
    pub designation: String,
    /// Unit of measure (e.g. "pièce", "kg").
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default, deserialize_with = "lenient_decimal::deserialize")]
    pub quantity: Decimal,
    /// Unit price excluding tax.
    #[serde(default, deserialize_with = "lenient_decimal::deserialize")]
    pub unit_price: Decimal,
    /// TVA rate in percent (0, 7, 13, 19...).
    #[serde(default, deserialize_with = "lenient_decimal::deserialize")]
    pub vat_rate: Decimal,
    /// Line discount in percent, applied before TVA.
    #[serde(
        default,
        alias = "lineDiscountPercent",
        deserialize_with = "lenient_decimal::deserialize"
    )]
    pub discount_percent: Decimal,
}

/// Inclusion flags and global discount for one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalsOptions {
    /// Discount in percent applied to both the HT and TVA totals.
    #[serde(default, deserialize_with = "lenient_decimal::deserialize")]
    pub global_discount_percent: Decimal,
    /// Add the 1% FODEC levy.
    #[serde(default)]
    pub include_fodec: bool,
    /// Add the flat timbre fiscal.
    #[serde(default)]
    pub include_stamp_duty: bool,
}

impl Default for TotalsOptions {
    fn default() -> Self {
        Self {
            global_discount_percent: Decimal::ZERO,
            include_fodec: false,
            include_stamp_duty: false,
        }
    }
}

impl TotalsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn global_discount(mut self, percent: Decimal) -> Self {
        self.global_discount_percent = percent;
        self
    }

    pub fn fodec(mut self, include: bool) -> Self {
        self.include_fodec = include;
        self
    }

    pub fn stamp_duty(mut self, include: bool) -> Self {
        self.include_stamp_duty = include;
        self
    }
}

/// Monetary totals of one document. Values are unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentTotals {
    /// Sum of line totals before the global discount.
    pub subtotal_ht: Decimal,
    /// `subtotal_ht - total_ht`.
    pub discount_amount: Decimal,
    /// Pre-tax total after the global discount.
    #[serde(rename = "totalHT")]
    pub total_ht: Decimal,
    /// TVA total after the global discount.
    #[serde(rename = "totalVAT")]
    pub total_vat: Decimal,
    pub fodec_amount: Decimal,
    pub stamp_duty_amount: Decimal,
    /// `total_ht + total_vat + fodec_amount + stamp_duty_amount`.
    #[serde(rename = "totalTTC")]
    pub total_ttc: Decimal,
}

impl DocumentTotals {
    /// All-zero totals, as produced for a document without lines.
    pub const ZERO: Self = Self {
        subtotal_ht: Decimal::ZERO,
        discount_amount: Decimal::ZERO,
        total_ht: Decimal::ZERO,
        total_vat: Decimal::ZERO,
        fodec_amount: Decimal::ZERO,
        stamp_duty_amount: Decimal::ZERO,
        total_ttc: Decimal::ZERO,
    };
}

/// TVA base and amount for one distinct rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VatBreakdownEntry {
    pub rate: Decimal,
    #[serde(rename = "baseHT")]
    pub base_ht: Decimal,
    pub vat_amount: Decimal,
}

/// Commercial document types sharing the totals engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Sale invoice (facture).
    Invoice,
    /// Quote (devis).
    Quote,
    /// Delivery note (bon de livraison).
    DeliveryNote,
    /// Purchase order (bon de commande).
    PurchaseOrder,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 4] = [
        Self::Invoice,
        Self::Quote,
        Self::DeliveryNote,
        Self::PurchaseOrder,
    ];

    /// Prefix used by document numbering.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Invoice => "FAC",
            Self::Quote => "DEV",
            Self::DeliveryNote => "BL",
            Self::PurchaseOrder => "BC",
        }
    }

    /// Parse from a numbering prefix.
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.prefix() == prefix)
    }

    /// Printed title.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Invoice => "Facture",
            Self::Quote => "Devis",
            Self::DeliveryNote => "Bon de livraison",
            Self::PurchaseOrder => "Bon de commande",
        }
    }

    /// Sentence introducing the total in words at the foot of the document.
    pub fn closing_sentence(&self) -> &'static str {
        match self {
            Self::Invoice => "Arrêtée la présente facture à la somme de",
            Self::Quote => "Arrêté le présent devis à la somme de",
            Self::DeliveryNote => "Arrêté le présent bon de livraison à la somme de",
            Self::PurchaseOrder => "Arrêté le présent bon de commande à la somme de",
        }
    }

    /// Whether the counterparty is a supplier rather than a client.
    pub fn is_purchase(&self) -> bool {
        matches!(self, Self::PurchaseOrder)
    }
}

/// Client or supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    pub name: String,
    /// Matricule fiscal.
    #[serde(default)]
    pub tax_id: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl Party {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tax_id: None,
            address: None,
            phone: None,
            email: None,
        }
    }

    pub fn tax_id(mut self, id: impl Into<String>) -> Self {
        self.tax_id = Some(id.into());
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// A committed commercial document with its totals snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub kind: DocumentKind,
    pub number: String,
    pub issue_date: NaiveDate,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    /// Client for sales documents, supplier for purchase orders.
    pub party: Party,
    pub lines: Vec<LineItem>,
    #[serde(default)]
    pub options: TotalsOptions,
    #[serde(default)]
    pub notes: Vec<String>,
    /// Totals snapshot taken at creation or last recompute.
    pub totals: DocumentTotals,
    #[serde(default)]
    pub vat_breakdown: Vec<VatBreakdownEntry>,
    /// Total TTC in words, when the `words` feature is enabled.
    #[serde(default)]
    pub amount_in_words: Option<String>,
}
