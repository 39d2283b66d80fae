use crate::{Store, StoreError};
use std::fmt;
use std::str::FromStr;

/// Form type a product dropdown belongs to, as sent by clients in the
/// `type` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductKind {
    Receipt,
    Issuance,
    Production,
    DcEntry,
}

impl ProductKind {
    /// The product list this form type reads from. Receipt and issuance
    /// share one list; production and delivery-challan entry share the
    /// other.
    pub fn family(self) -> ProductFamily {
        match self {
            ProductKind::Receipt | ProductKind::Issuance => ProductFamily::Receipt,
            ProductKind::Production | ProductKind::DcEntry => ProductFamily::Production,
        }
    }
}

impl FromStr for ProductKind {
    type Err = UnknownProductKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "receipt" => Ok(ProductKind::Receipt),
            "issuance" => Ok(ProductKind::Issuance),
            "production" => Ok(ProductKind::Production),
            "dc-entry" => Ok(ProductKind::DcEntry),
            other => Err(UnknownProductKind(other.to_string())),
        }
    }
}

#[derive(thiserror::Error, Debug)]
#[error("unknown product type: {0}")]
pub struct UnknownProductKind(pub String);

/// Storage grouping for product lists. One JSON file per family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductFamily {
    Receipt,
    Production,
}

impl ProductFamily {
    fn filename(self) -> &'static str {
        match self {
            ProductFamily::Receipt => "products-receipt.json",
            ProductFamily::Production => "products-production.json",
        }
    }
}

impl fmt::Display for ProductFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductFamily::Receipt => write!(f, "receipt"),
            ProductFamily::Production => write!(f, "production"),
        }
    }
}

impl Store {
    /// Returns the stored product list for a family, or an empty list if
    /// nothing has been uploaded yet.
    pub fn load_products(&self, family: ProductFamily) -> Result<Vec<String>, StoreError> {
        Ok(self.read_document(family.filename())?.unwrap_or_default())
    }

    /// Replaces a family's product list wholesale.
    pub fn store_products(
        &self,
        family: ProductFamily,
        products: &[String],
    ) -> Result<(), StoreError> {
        self.write_document(family.filename(), &products)?;
        tracing::info!(%family, count = products.len(), "product list replaced");
        Ok(())
    }
}
