// Spreadsheet HTML-export parsing
use scraper::{ElementRef, Html, Selector};

use super::RecordParser;
use crate::model::{ParserError, SourceExtras, SourceRecord};

#[derive(Debug, Clone, Copy, Default)]
struct Columns {
    main_category: Option<usize>,
    sub_category: Option<usize>,
    title: Option<usize>,
    sale_price: Option<usize>,
    original_price: Option<usize>,
    store: Option<usize>,
    sale_period: Option<usize>,
    notes: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &[String]) -> Self {
        let mut cols = Self::default();
        for (i, header) in headers.iter().enumerate() {
            // "Original Price" before "Sale Price", the title test after categories
            let slot = if header.contains("Main Category") {
                &mut cols.main_category
            } else if header.contains("Sub Category") {
                &mut cols.sub_category
            } else if header.contains("Item") || header.contains("Product") {
                &mut cols.title
            } else if header.contains("Original Price") {
                &mut cols.original_price
            } else if header.contains("Sale Price") {
                &mut cols.sale_price
            } else if header.contains("Store") {
                &mut cols.store
            } else if header.contains("Sale Period") {
                &mut cols.sale_period
            } else if header.contains("Notes") {
                &mut cols.notes
            } else {
                continue;
            };
            *slot = Some(i);
        }
        cols
    }

    fn max_index(&self) -> usize {
        [
            self.main_category,
            self.sub_category,
            self.title,
            self.sale_price,
            self.original_price,
            self.store,
            self.sale_period,
            self.notes,
        ]
        .into_iter()
        .flatten()
        .max()
        .unwrap_or(0)
    }
}

struct Cell {
    text: String,
    link: Option<String>,
}

fn field(row: &[Cell], col: Option<usize>) -> String {
    col.map(|i| row[i].text.clone()).unwrap_or_default()
}

pub struct SheetParser {
    row_selector: Selector,
    cell_selector: Selector,
    link_selector: Selector,
}

impl SheetParser {
    pub fn new() -> Result<Self, ParserError> {
        let parse = |css: &str| Selector::parse(css).map_err(|e| ParserError::Html(e.to_string()));
        Ok(Self {
            row_selector: parse("tr")?,
            cell_selector: parse("td, th")?,
            link_selector: parse("a[href]")?,
        })
    }

    fn cell(&self, element: ElementRef<'_>) -> Cell {
        let text = element
            .text()
            .collect::<String>()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        let link = element
            .select(&self.link_selector)
            .filter_map(|a| a.value().attr("href"))
            .map(str::trim)
            .find(|href| !href.is_empty() && !href.starts_with('#'))
            .map(str::to_string);
        Cell { text, link }
    }
}

impl RecordParser for SheetParser {
    /// Rows above the header row are ignored. Rows without a title, the
    /// "See all" footer rows and rows without a main category are skipped.
    fn parse(&self, html: &str) -> Result<Vec<SourceRecord>, ParserError> {
        let document = Html::parse_document(html);
        let rows: Vec<Vec<Cell>> = document
            .select(&self.row_selector)
            .map(|row| {
                row.select(&self.cell_selector)
                    .map(|c| self.cell(c))
                    .collect::<Vec<_>>()
            })
            .filter(|cells| !cells.is_empty())
            .collect();

        let header_index = rows
            .iter()
            .position(|row| {
                row.iter().any(|c| c.text.contains("Main Category"))
                    && row
                        .iter()
                        .any(|c| c.text.contains("Item") || c.text.contains("Product"))
            })
            .ok_or_else(|| ParserError::MissingHeader("Main Category, Item".to_string()))?;

        let headers: Vec<String> = rows[header_index].iter().map(|c| c.text.clone()).collect();
        let cols = Columns::from_headers(&headers);
        let (Some(title_col), Some(main_col)) = (cols.title, cols.main_category) else {
            return Err(ParserError::MissingHeader("Main Category, Item".to_string()));
        };
        let max_index = cols.max_index();

        let records = rows[header_index + 1..]
            .iter()
            .filter(|row| row.len() > max_index)
            .filter_map(|row| {
                let title_cell = &row[title_col];
                let title = title_cell.text.clone();
                if title.is_empty() || title.starts_with("See all") {
                    return None;
                }
                let main_category = row[main_col].text.clone();
                if main_category.is_empty() {
                    return None;
                }

                let extras = SourceExtras {
                    main_category,
                    sub_category: field(row, cols.sub_category),
                    sale_price: field(row, cols.sale_price),
                    original_price: field(row, cols.original_price),
                    store: field(row, cols.store),
                    sale_period: field(row, cols.sale_period),
                    notes: field(row, cols.notes),
                };
                let link = title_cell.link.clone().unwrap_or_default();
                Some(SourceRecord::new(title, link).with_extras(extras))
            })
            .collect();

        Ok(records)
    }
}
