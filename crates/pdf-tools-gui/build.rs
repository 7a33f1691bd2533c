//! Fetches a prebuilt pdfium into `vendor/pdfium` for the page renderer.
//!
//! Thumbnails are optional at runtime, so a failed download only warns.

use std::env;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

const PDFIUM_RELEASE: &str = "chromium/7543";

struct PdfiumBinary {
    platform: &'static str,
    arch: &'static str,
    lib_name: &'static str,
}

impl PdfiumBinary {
    fn for_target(target: &str) -> Option<Self> {
        let arm = target.contains("aarch64");
        let binary = if target.contains("apple") {
            Self {
                platform: "mac",
                arch: if arm { "arm64" } else { "x64" },
                lib_name: "libpdfium.dylib",
            }
        } else if target.contains("linux") {
            Self {
                platform: "linux",
                arch: if arm { "arm64" } else { "x64" },
                lib_name: "libpdfium.so",
            }
        } else if target.contains("windows") {
            let arch = if arm {
                "arm64"
            } else if target.contains("i686") {
                "x86"
            } else {
                "x64"
            };
            Self {
                platform: "win",
                arch,
                lib_name: "pdfium.dll",
            }
        } else {
            return None;
        };
        Some(binary)
    }

    fn url(&self) -> String {
        format!(
            "https://github.com/bblanchon/pdfium-binaries/releases/download/{}/pdfium-{}-{}.tgz",
            PDFIUM_RELEASE, self.platform, self.arch
        )
    }
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    if env::var("CARGO_FEATURE_PDF_VIEWER").is_err() {
        return;
    }

    let target = env::var("TARGET").unwrap_or_default();
    let Some(binary) = PdfiumBinary::for_target(&target) else {
        println!("cargo:warning=No prebuilt pdfium for {target}; thumbnails need a system pdfium");
        return;
    };

    let Some(pdfium_dir) = vendor_dir() else {
        println!("cargo:warning=Could not locate the workspace root");
        return;
    };
    let lib_dir = pdfium_dir.join("lib");
    let lib_path = lib_dir.join(binary.lib_name);

    if !lib_path.exists() {
        if let Err(e) = install(&binary, &pdfium_dir) {
            println!("cargo:warning=pdfium download failed: {e}");
            return;
        }
        if !lib_path.exists() {
            println!("cargo:warning={} missing after extraction", lib_path.display());
            return;
        }
        println!("cargo:warning=pdfium installed to {}", pdfium_dir.display());
    }

    if binary.platform == "mac" {
        fix_install_name(&lib_path);
    }

    println!("cargo:rustc-link-search=native={}", lib_dir.display());
    if binary.platform != "win" {
        println!("cargo:rustc-link-arg=-Wl,-rpath,{}", lib_dir.display());
    }
    println!("cargo:rerun-if-changed={}", lib_dir.display());
}

fn vendor_dir() -> Option<PathBuf> {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").ok()?);
    let workspace_root = manifest_dir.parent()?.parent()?;
    Some(workspace_root.join("vendor").join("pdfium"))
}

fn install(binary: &PdfiumBinary, pdfium_dir: &Path) -> Result<(), Box<dyn Error>> {
    use flate2::read::GzDecoder;
    use tar::Archive;

    let url = binary.url();
    println!("cargo:warning=Downloading pdfium from {url}");
    fs::create_dir_all(pdfium_dir)?;

    let response = ureq::get(&url).call()?;
    let tarball = env::temp_dir().join("pdfium.tgz");
    let mut file = fs::File::create(&tarball)?;
    std::io::copy(&mut response.into_reader(), &mut file)?;
    drop(file);

    let unpacked = Archive::new(GzDecoder::new(fs::File::open(&tarball)?)).unpack(pdfium_dir);
    let _ = fs::remove_file(&tarball);
    unpacked?;
    Ok(())
}

/// Point the dylib's install name at @rpath so the rpath above finds it.
fn fix_install_name(lib_path: &Path) {
    let output = std::process::Command::new("install_name_tool")
        .arg("-id")
        .arg("@rpath/libpdfium.dylib")
        .arg(lib_path)
        .output();
    match output {
        Ok(result) if result.status.success() => {}
        Ok(result) => println!(
            "cargo:warning=install_name_tool failed: {}",
            String::from_utf8_lossy(&result.stderr)
        ),
        Err(e) => println!("cargo:warning=install_name_tool not available: {e}"),
    }
}
