//! Barcode symbology identifiers and symbology sets.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Barcode/QR symbologies recognized by the vendor scanning SDK.
///
/// The discriminants are the vendor's bit-flag constants. They are used as
/// a logical set (see [`SymbologySet`]), never OR-combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[repr(u32)]
pub enum Symbology {
    /// Sentinel value for an unknown symbology.
    Unknown = 0x0000000,
    /// EAN-13 1D barcode symbology.
    Ean13 = 0x0000001,
    /// EAN-8 1D barcode symbology.
    Ean8 = 0x0000002,
    /// UPC-12/UPC-A 1D barcode symbology.
    Upc12 = 0x0000004,
    /// UPC-E 1D barcode symbology.
    Upce = 0x0000008,
    /// Code 128 1D barcode symbology, including GS1-Code128.
    Code128 = 0x0000010,
    /// Code 39 barcode symbology.
    Code39 = 0x0000020,
    /// Code 93 barcode symbology.
    Code93 = 0x0000040,
    /// Interleaved-Two-of-Five (ITF) 1D barcode symbology.
    Itf = 0x0000080,
    /// QR Code 2D barcode symbology.
    Qr = 0x0000100,
    /// Data Matrix 2D barcode symbology.
    DataMatrix = 0x0000200,
    /// PDF417 barcode symbology.
    Pdf417 = 0x0000400,
    /// MSI Plessey 1D barcode symbology.
    MsiPlessey = 0x0000800,
    /// GS1 DataBar 14 1D barcode symbology.
    Gs1Databar = 0x0001000,
    /// GS1 DataBar Expanded 1D barcode symbology.
    Gs1DatabarExpanded = 0x0002000,
    /// Codabar 1D barcode symbology.
    Codabar = 0x0004000,
    /// Aztec Code 2D barcode symbology.
    Aztec = 0x0008000,
    /// Two-digit add-on for UPC and EAN codes.
    ///
    /// Requires at least one of EAN-13, UPC-12, UPC-E, or EAN-8 to be
    /// enabled as well.
    TwoDigitAddOn = 0x0010000,
    /// Five-digit add-on for UPC and EAN codes.
    ///
    /// Requires at least one of EAN-13, UPC-12, UPC-E, or EAN-8 to be
    /// enabled as well.
    FiveDigitAddOn = 0x0020000,
    /// MaxiCode 2D barcode symbology.
    MaxiCode = 0x0040000,
    /// Code 11 1D barcode symbology.
    Code11 = 0x0080000,
    /// GS1 DataBar Limited 1D barcode symbology.
    Gs1DatabarLimited = 0x0100000,
    /// Code 25 1D barcode symbology.
    ///
    /// Also known as 'Industrial 2 of 5', 'Standard 2 of 5' or
    /// 'Discrete 2 of 5'.
    Code25 = 0x0200000,
    /// Micro PDF417 2D barcode symbology.
    MicroPdf417 = 0x0400000,
    /// Royal Mail 4 State Customer Code (RM4SCC).
    Rm4scc = 0x0800000,
    /// Royal Dutch TPG Post KIX.
    Kix = 0x1000000,
    /// DotCode 2D barcode symbology.
    DotCode = 0x2000000,
}

impl Symbology {
    /// Get the vendor bit-flag value for this symbology.
    #[must_use]
    pub fn value(self) -> u32 {
        self as u32
    }

    /// Look up a symbology by its vendor bit-flag value.
    #[must_use]
    pub fn from_value(value: u32) -> Option<Self> {
        Self::all().iter().copied().find(|s| s.value() == value)
    }

    /// Get the symbology key string (e.g., "ean13", "qr").
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Ean13 => "ean13",
            Self::Ean8 => "ean8",
            Self::Upc12 => "upc12",
            Self::Upce => "upce",
            Self::Code128 => "code128",
            Self::Code39 => "code39",
            Self::Code93 => "code93",
            Self::Itf => "itf",
            Self::Qr => "qr",
            Self::DataMatrix => "data-matrix",
            Self::Pdf417 => "pdf417",
            Self::MsiPlessey => "msi-plessey",
            Self::Gs1Databar => "gs1-databar",
            Self::Gs1DatabarExpanded => "gs1-databar-expanded",
            Self::Codabar => "codabar",
            Self::Aztec => "aztec",
            Self::TwoDigitAddOn => "two-digit-add-on",
            Self::FiveDigitAddOn => "five-digit-add-on",
            Self::MaxiCode => "maxicode",
            Self::Code11 => "code11",
            Self::Gs1DatabarLimited => "gs1-databar-limited",
            Self::Code25 => "code25",
            Self::MicroPdf417 => "micropdf417",
            Self::Rm4scc => "rm4scc",
            Self::Kix => "kix",
            Self::DotCode => "dotcode",
        }
    }

    /// Parse a symbology from its string representation.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|sym| sym.as_str() == s)
    }

    /// Get all symbologies, excluding the [`Symbology::Unknown`] sentinel.
    #[must_use]
    pub fn all() -> &'static [Symbology] {
        &[
            Self::Ean13,
            Self::Ean8,
            Self::Upc12,
            Self::Upce,
            Self::Code128,
            Self::Code39,
            Self::Code93,
            Self::Itf,
            Self::Qr,
            Self::DataMatrix,
            Self::Pdf417,
            Self::MsiPlessey,
            Self::Gs1Databar,
            Self::Gs1DatabarExpanded,
            Self::Codabar,
            Self::Aztec,
            Self::TwoDigitAddOn,
            Self::FiveDigitAddOn,
            Self::MaxiCode,
            Self::Code11,
            Self::Gs1DatabarLimited,
            Self::Code25,
            Self::MicroPdf417,
            Self::Rm4scc,
            Self::Kix,
            Self::DotCode,
        ]
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An unordered set of symbologies for one scan request.
///
/// Backed by a `BTreeSet`, so iteration is always in ascending bit-flag
/// value. The array handed to the Android native layer is therefore
/// reproducible regardless of construction order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbologySet {
    inner: BTreeSet<Symbology>,
}

impl SymbologySet {
    /// Create an empty symbology set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set from a list of symbologies. Duplicates collapse.
    #[must_use]
    pub fn of(symbologies: impl IntoIterator<Item = Symbology>) -> Self {
        symbologies.into_iter().collect()
    }

    /// The set used by the QR convenience scan: QR only.
    #[must_use]
    pub fn qr_only() -> Self {
        Self::of([Symbology::Qr])
    }

    /// The fixed bundle used by the barcode convenience scan.
    #[must_use]
    pub fn standard_barcodes() -> Self {
        Self::of([
            Symbology::Ean13,
            Symbology::Upc12,
            Symbology::Ean8,
            Symbology::Upce,
            Symbology::Code39,
            Symbology::Code128,
            Symbology::Itf,
            Symbology::DataMatrix,
        ])
    }

    /// Add a symbology to the set.
    pub fn insert(&mut self, symbology: Symbology) -> bool {
        self.inner.insert(symbology)
    }

    /// Remove a symbology from the set.
    pub fn remove(&mut self, symbology: Symbology) -> bool {
        self.inner.remove(&symbology)
    }

    /// Check whether the set contains a symbology.
    #[must_use]
    pub fn contains(&self, symbology: Symbology) -> bool {
        self.inner.contains(&symbology)
    }

    /// Number of symbologies in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check whether the set is empty.
    ///
    /// An empty set is legal and is forwarded to the native layer as-is.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterate the symbologies in ascending bit-flag value.
    pub fn iter(&self) -> impl Iterator<Item = Symbology> + '_ {
        self.inner.iter().copied()
    }

    /// The vendor bit-flag values in ascending order, for the native
    /// `enabledSymbologies` array.
    #[must_use]
    pub fn to_values(&self) -> Vec<u32> {
        self.inner.iter().map(|s| s.value()).collect()
    }
}

impl FromIterator<Symbology> for SymbologySet {
    fn from_iter<I: IntoIterator<Item = Symbology>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for SymbologySet {
    type Item = Symbology;
    type IntoIter = std::collections::btree_set::IntoIter<Symbology>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl fmt::Display for SymbologySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for sym in self.iter() {
            if !first {
                write!(f, ",")?;
            }
            write!(f, "{sym}")?;
            first = false;
        }
        Ok(())
    }
}
