//! Spreadsheet export of the registration list.

use registration_store::Registration;
use rust_xlsxwriter::{
    Color, DocProperties, ExcelDateTime, Format, FormatAlign, FormatBorder, Workbook, XlsxError,
};

/// Fixed column titles, in output order.
pub const COLUMNS: [&str; 14] = [
    "№",
    "Дата заявки",
    "Фамилия",
    "Имя",
    "Отчество",
    "Дата рождения",
    "Пол",
    "Страна",
    "Город",
    "Звание",
    "Команда",
    "Класс лодки",
    "Телефон",
    "Дистанции",
];

const COLUMN_WIDTHS: [f64; 14] = [
    5.0, 14.0, 18.0, 14.0, 16.0, 14.0, 7.0, 14.0, 16.0, 12.0, 20.0, 13.0, 20.0, 30.0,
];

/// Columns rendered centered: № and Пол.
const CENTERED_COLUMNS: [usize; 2] = [0, 6];

const HEADER_FILL: Color = Color::RGB(0x0A2463);
const BORDER_COLOR: Color = Color::RGB(0xD8DFE9);
const EVEN_ROW_FILL: Color = Color::RGB(0xE8F1FB);

/// Cell text for one data row, in column order.
///
/// `position` is the 1-based place of the entry in the canonical sequence;
/// it is computed, not stored.
pub fn report_row(position: usize, reg: &Registration) -> [String; 14] {
    let distances = reg
        .distances
        .iter()
        .map(|d| d.label())
        .collect::<Vec<_>>()
        .join(", ");

    [
        position.to_string(),
        reg.timestamp.clone(),
        reg.surname.clone(),
        reg.firstname.clone(),
        reg.patronymic.clone(),
        reg.birthdate.clone(),
        reg.gender.label().to_string(),
        reg.country.clone(),
        reg.city.clone(),
        reg.rank.clone(),
        reg.team.clone(),
        reg.boat_class.label().to_string(),
        reg.phone.clone(),
        distances,
    ]
}

/// Full cell matrix backing the workbook: one header row plus one data row
/// per registration, in input order.
pub fn report_matrix(registrations: &[Registration]) -> Vec<[String; 14]> {
    let mut rows = Vec::with_capacity(registrations.len() + 1);
    rows.push(COLUMNS.map(str::to_string));
    for (i, reg) in registrations.iter().enumerate() {
        rows.push(report_row(i + 1, reg));
    }
    rows
}

/// Render the registration sequence as an `.xlsx` workbook.
///
/// Pure transform: no storage or network side effects, and identical input
/// yields identical bytes (the document creation date is pinned; the only
/// row-dependent styling is parity-keyed shading).
pub fn generate(registrations: &[Registration]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();

    let properties =
        DocProperties::new().set_creation_datetime(&ExcelDateTime::from_ymd(2026, 1, 1)?);
    workbook.set_properties(&properties);

    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Заявки")?;

    let header_format = Format::new()
        .set_font_name("Arial")
        .set_font_size(11)
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(HEADER_FILL)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_text_wrap()
        .set_border(FormatBorder::Thin)
        .set_border_color(BORDER_COLOR);

    let data_format = Format::new()
        .set_font_name("Arial")
        .set_font_size(10)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin)
        .set_border_color(BORDER_COLOR);
    let centered_format = data_format.clone().set_align(FormatAlign::Center);
    let even_format = data_format.clone().set_background_color(EVEN_ROW_FILL);
    let even_centered_format = centered_format.clone().set_background_color(EVEN_ROW_FILL);

    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        worksheet.set_column_width(col as u16, *width)?;
    }

    let matrix = report_matrix(registrations);
    for (row, cells) in matrix.iter().enumerate() {
        for (col, value) in cells.iter().enumerate() {
            if row == 0 {
                worksheet.write_string_with_format(0, col as u16, value.as_str(), &header_format)?;
                continue;
            }

            let even = row % 2 == 0;
            let format = match (CENTERED_COLUMNS.contains(&col), even) {
                (true, true) => &even_centered_format,
                (true, false) => &centered_format,
                (false, true) => &even_format,
                (false, false) => &data_format,
            };

            if col == 0 {
                worksheet.write_number_with_format(row as u32, 0, row as f64, format)?;
            } else {
                worksheet.write_string_with_format(row as u32, col as u16, value.as_str(), format)?;
            }
        }
    }

    worksheet.set_freeze_panes(1, 0)?;
    worksheet.autofilter(
        0,
        0,
        registrations.len() as u32,
        (COLUMNS.len() - 1) as u16,
    )?;

    workbook.save_to_buffer()
}
