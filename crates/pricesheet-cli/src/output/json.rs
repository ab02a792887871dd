use pricesheet_core::error::PriceSheetError;
use serde::Serialize;

pub fn print<T: Serialize>(value: &T) -> Result<(), PriceSheetError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
