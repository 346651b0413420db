use crate::cli::parser::Commands;
use crate::errors::{AppError, AppResult};
use crate::models::client_type::ClientType;
use crate::models::gender::Gender;
use crate::qr;
use crate::ui::messages::success;
use std::path::Path;

/// Generate a visitor badge QR code PNG from the form fields.
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Qr {
        name,
        gender,
        client_type,
        office,
        purpose,
        file,
    } = cmd
    {
        let gender = Gender::from_input(gender)
            .ok_or_else(|| AppError::InvalidGender(gender.to_string()))?;

        let client_type = ClientType::from_input(client_type)
            .ok_or_else(|| AppError::InvalidClientType(client_type.to_string()))?;

        let payload = qr::build_payload(name, gender, client_type, office, purpose)?;
        qr::save_png(&payload, Path::new(file))?;

        success(format!("QR code saved: {}", file));
    }

    Ok(())
}
