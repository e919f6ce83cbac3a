//! Catalog serialization.
//!
//! The catalog is written once, as one pretty-printed JSON array, after
//! extraction has finished.

use std::io::Write;
use std::path::Path;

use twoddoc_catalog_models::FieldCatalog;

use crate::CatalogError;

/// Writes `catalog` as pretty-printed JSON followed by a newline.
///
/// # Errors
///
/// Returns [`CatalogError::Json`] or [`CatalogError::Io`] if writing fails.
pub fn write_catalog<W: Write>(
    catalog: &FieldCatalog,
    writer: &mut W,
) -> Result<(), CatalogError> {
    serde_json::to_writer_pretty(&mut *writer, catalog)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Writes `catalog` to `output`, or to standard output when `None`.
///
/// Parent directories of `output` are created as needed.
///
/// # Errors
///
/// Returns [`CatalogError`] if the destination cannot be written.
pub fn write_catalog_to(
    catalog: &FieldCatalog,
    output: Option<&Path>,
) -> Result<(), CatalogError> {
    let Some(path) = output else {
        let mut stdout = std::io::stdout().lock();
        return write_catalog(catalog, &mut stdout);
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let mut buf = Vec::new();
    write_catalog(catalog, &mut buf)?;
    std::fs::write(path, buf)?;

    log::info!("Wrote {} field records to {}", catalog.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use twoddoc_catalog_models::FieldRecord;

    fn sample() -> FieldCatalog {
        vec![FieldRecord {
            id: "AB".to_owned(),
            name: "Sample Field".to_owned(),
            min_size: "1".to_owned(),
            max_size: "10".to_owned(),
            value_type: "Numeric".to_owned(),
            description: "A short field.".to_owned(),
        }]
        .into()
    }

    #[test]
    fn pretty_prints_with_catalog_keys() {
        let mut buf = Vec::new();
        write_catalog(&sample(), &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            concat!(
                "[\n",
                "  {\n",
                "    \"id\": \"AB\",\n",
                "    \"nom\": \"Sample Field\",\n",
                "    \"min\": \"1\",\n",
                "    \"max\": \"10\",\n",
                "    \"nature\": \"Numeric\",\n",
                "    \"description\": \"A short field.\"\n",
                "  }\n",
                "]\n",
            )
        );
    }

    #[test]
    fn empty_catalog_is_an_empty_array() {
        let mut buf = Vec::new();
        write_catalog(&FieldCatalog::new(), &mut buf).unwrap();
        assert_eq!(buf, b"[]\n");
    }

    #[test]
    fn writes_file_creating_parent_directories() {
        let tmp = std::env::temp_dir().join("twoddoc_catalog_output_test");
        let _ = fs::remove_dir_all(&tmp);

        let path = tmp.join("generated").join("structure.json");
        write_catalog_to(&sample(), Some(&path)).unwrap();

        let written: FieldCatalog =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, sample());

        // Cleanup
        let _ = fs::remove_dir_all(&tmp);
    }
}
