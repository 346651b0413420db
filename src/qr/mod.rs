//! Visitor badge QR generation.
//!
//! The payload is the pipe-delimited string
//! `Name|Gender|ClientType|Office|Purpose`, rendered as a PNG symbol.
//! Embedded `|` characters in the fields are not escaped; scanners split
//! on the first four delimiters.

use crate::errors::{AppError, AppResult};
use crate::models::client_type::ClientType;
use crate::models::gender::Gender;
use qrcode::QrCode;
use std::path::Path;

const SCALE: u32 = 4;
const BORDER: u32 = 4;

/// Build the pipe-delimited QR payload from the badge fields.
pub fn build_payload(
    name: &str,
    gender: Gender,
    client_type: ClientType,
    office: &str,
    purpose: &str,
) -> AppResult<String> {
    let name = name.trim();
    let office = office.trim();
    let purpose = purpose.trim();

    if name.is_empty() {
        return Err(AppError::MissingField("name"));
    }
    if office.is_empty() {
        return Err(AppError::MissingField("office"));
    }
    if purpose.is_empty() {
        return Err(AppError::MissingField("purpose"));
    }

    Ok(format!(
        "{}|{}|{}|{}|{}",
        name,
        gender.to_db_str(),
        client_type.to_db_str(),
        office,
        purpose
    ))
}

/// Encode `data` into a QR symbol and save it as a grayscale PNG.
pub fn save_png(data: &str, path: &Path) -> AppResult<()> {
    let code = QrCode::new(data.as_bytes())
        .map_err(|e| AppError::Qr(format!("failed to encode payload: {e}")))?;

    let modules = code.to_colors();
    let width = code.width() as u32;
    let img_size = (width + BORDER * 2) * SCALE;

    let mut img_buf = vec![255u8; (img_size * img_size) as usize];

    for (i, color) in modules.iter().enumerate() {
        let x = (i as u32) % width;
        let y = (i as u32) / width;
        if *color == qrcode::types::Color::Dark {
            let px = (x + BORDER) * SCALE;
            let py = (y + BORDER) * SCALE;
            for dy in 0..SCALE {
                for dx in 0..SCALE {
                    let idx = ((py + dy) * img_size + (px + dx)) as usize;
                    if idx < img_buf.len() {
                        img_buf[idx] = 0;
                    }
                }
            }
        }
    }

    let gray_img = image::GrayImage::from_raw(img_size, img_size, img_buf)
        .ok_or_else(|| AppError::Qr("failed to build QR image buffer".to_string()))?;

    gray_img
        .save(path)
        .map_err(|e| AppError::Qr(format!("failed to save PNG: {e}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_is_pipe_delimited_in_field_order() {
        let payload = build_payload(
            "Jane Roe",
            Gender::Female,
            ClientType::Guest,
            "Records Office",
            "Document request",
        )
        .unwrap();

        assert_eq!(
            payload,
            "Jane Roe|Female|Guest|Records Office|Document request"
        );
    }

    #[test]
    fn embedded_delimiters_are_not_escaped() {
        let payload = build_payload(
            "A|B",
            Gender::Male,
            ClientType::Student,
            "X",
            "Y",
        )
        .unwrap();

        assert_eq!(payload, "A|B|Male|Student|X|Y");
    }

    #[test]
    fn required_fields_must_be_non_empty() {
        assert!(build_payload("", Gender::Male, ClientType::Guest, "X", "Y").is_err());
        assert!(build_payload("A", Gender::Male, ClientType::Guest, "  ", "Y").is_err());
        assert!(build_payload("A", Gender::Male, ClientType::Guest, "X", "").is_err());
    }
}
