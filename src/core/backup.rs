use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    pub fn backup(
        _pool: &mut DbPool,
        cfg: &Config,
        dest_file: &str,
        compress: bool,
    ) -> AppResult<()> {
        let src = Path::new(&cfg.database);
        let dest = crate::utils::path::expand_tilde(dest_file);
        let dest = dest.as_path();

        if !src.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )
            .into());
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        // Existing destination → ask confirmation
        if dest.exists() {
            println!(
                "⚠️  The file '{}' already exists.\nDo you want to overwrite it? [y/N]: ",
                dest.display()
            );

            use std::io::{Write, stdin, stdout};

            let mut answer = String::new();
            print!("> ");
            stdout().flush().ok();
            stdin().read_line(&mut answer)?;

            let answer = answer.trim().to_lowercase();
            if !(answer == "y" || answer == "yes") {
                println!("❌ Backup cancelled by user.");
                return Ok(());
            }
            println!();
        }

        fs::copy(src, dest)?;
        println!("✅ Backup created: {}", dest.display());

        let final_path = if compress {
            let compressed = compress_backup(dest)?;

            if compressed != dest.to_path_buf() {
                if let Err(e) = fs::remove_file(dest) {
                    eprintln!("⚠️ Failed to remove uncompressed backup: {}", e);
                } else {
                    println!("🗑️ Removed uncompressed backup: {}", dest.display());
                }
            }

            compressed
        } else {
            dest.to_path_buf()
        };

        if let Ok(conn) = Connection::open(src) {
            let _ = crate::db::log::vlog(
                &conn,
                "backup",
                &final_path.to_string_lossy(),
                if compress {
                    "Backup created and compressed"
                } else {
                    "Backup created"
                },
            );
        }

        Ok(())
    }
}

/// Compress a backup: .zip on Windows, .tar.gz elsewhere.
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    if cfg!(target_os = "windows") {
        compress_zip(path)
    } else {
        compress_tar_gz(path)
    }
}

fn compress_zip(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut f = fs::File::open(path)?;
    zip.start_file(
        path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "backup.sqlite".to_string()),
        options,
    )
    .map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    println!("📦 Compressed: {}", zip_path.display());

    Ok(zip_path)
}

fn compress_tar_gz(path: &Path) -> AppResult<PathBuf> {
    let tgz_path = path.with_extension("tar.gz");
    let file = fs::File::create(&tgz_path)?;

    let enc = flate2::write::GzEncoder::new(file, flate2::Compression::default());
    let mut tar = tar::Builder::new(enc);

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "backup.sqlite".to_string());

    tar.append_path_with_name(path, name)?;
    tar.into_inner()?.finish()?;

    println!("📦 Compressed: {}", tgz_path.display());

    Ok(tgz_path)
}
