use std::path::Path;

use anyhow::{bail, Context, Result};

/// Read a cartridge image from disk.
///
/// An empty path, an unreadable file and a zero-length file are all fatal.
pub fn load_rom(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        bail!("no ROM path given");
    }
    let rom = std::fs::read(path)
        .with_context(|| format!("failed to read ROM '{}'", path.display()))?;
    if rom.is_empty() {
        bail!("ROM '{}' is empty", path.display());
    }
    log::info!("loaded ROM '{}' ({} bytes)", path.display(), rom.len());
    Ok(rom)
}

/// Read an optional boot image. A missing or unreadable file only disables
/// the boot overlay.
pub fn load_boot_image(path: impl AsRef<Path>) -> Option<Vec<u8>> {
    let path = path.as_ref();
    match std::fs::read(path) {
        Ok(bytes) if !bytes.is_empty() => {
            log::info!("loaded boot image '{}' ({} bytes)", path.display(), bytes.len());
            Some(bytes)
        }
        Ok(_) => {
            log::info!("boot image '{}' is empty, starting post-boot", path.display());
            None
        }
        Err(e) => {
            log::info!(
                "boot image '{}' unavailable ({e}), starting post-boot",
                path.display()
            );
            None
        }
    }
}
