/// CSV export with browser-initiated download
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Trait for types that can be written out as CSV rows
pub trait CsvExportable {
    /// Column headers, in output order
    fn headers() -> Vec<&'static str>;

    /// One CSV row worth of cell values
    fn to_csv_row(&self) -> Vec<String>;
}

/// Build the full CSV document for a list of rows
pub fn build_csv<T: CsvExportable>(data: &[T]) -> String {
    let mut csv_content = String::new();

    let headers = T::headers();
    csv_content.push_str(&headers.join(","));
    csv_content.push('\n');

    for item in data {
        let row = item.to_csv_row();
        let escaped_row: Vec<String> = row.iter().map(|cell| escape_csv_cell(cell)).collect();
        csv_content.push_str(&escaped_row.join(","));
        csv_content.push('\n');
    }

    csv_content
}

/// Export a list of rows as a CSV file and trigger the download
pub fn export_csv<T: CsvExportable>(data: &[T], filename: &str) -> Result<(), String> {
    if data.is_empty() {
        return Err("No rows to export".to_string());
    }

    let csv_content = build_csv(data);
    let blob = create_csv_blob(&csv_content)?;
    download_blob(&blob, filename)?;

    Ok(())
}

/// Quote a CSV cell when it contains the separator, quotes or newlines
fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        let escaped = cell.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        cell.to_string()
    }
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    document
        .body()
        .ok_or("No body element")?
        .append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;

    anchor.click();

    document
        .body()
        .ok_or("No body element")?
        .remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestRow {
        day: &'static str,
        value: i64,
    }

    impl CsvExportable for TestRow {
        fn headers() -> Vec<&'static str> {
            vec!["Day", "Value"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![self.day.to_string(), self.value.to_string()]
        }
    }

    #[test]
    fn test_build_csv() {
        let rows = vec![
            TestRow {
                day: "Mon",
                value: 4200,
            },
            TestRow {
                day: "Tue",
                value: 3800,
            },
        ];
        assert_eq!(build_csv(&rows), "Day,Value\nMon,4200\nTue,3800\n");
    }

    #[test]
    fn test_escape_csv_cell() {
        assert_eq!(escape_csv_cell("plain"), "plain");
        assert_eq!(escape_csv_cell("a,b"), "\"a,b\"");
        assert_eq!(escape_csv_cell("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv_cell("two\nlines"), "\"two\nlines\"");
    }
}
