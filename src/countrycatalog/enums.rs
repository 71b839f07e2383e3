use strum::EnumIter;

/// The orderings the catalog keeps ready for selection controls.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogOrder {
    /// By name, preceded by a United States row and a placeholder row.
    ByNameUsFirst,
    /// By English name, one row per region.
    ByName,
    /// By ISO region code, one row per region.
    ByIso,
    /// By calling code, one row per calling code. Regions without a code
    /// are left out.
    ByCallingCode,
}
