//! Внутренние вспомогательные функции.
//!
//! Здесь собраны разбор CSV-строк словарного пакета и преобразования типов.

use csv_core::ReadFieldResult;

/// Преобразование из u32 в реализующий тип.
///
/// В отличие от стандартного `From`, это преобразование опирается на то,
/// что ширина указателя равна 32 или 64 битам (проверяется в lib.rs).
pub trait FromU32 {
    fn from_u32(src: u32) -> Self;
}

#[cfg(any(target_pointer_width = "32", target_pointer_width = "64"))]
impl FromU32 for usize {
    #[inline(always)]
    fn from_u32(src: u32) -> Self {
        // Since the pointer width is guaranteed to be 32 or 64,
        // the following process always succeeds.
        unsafe { Self::try_from(src).unwrap_unchecked() }
    }
}

/// Разбирает одну CSV-строку на поля.
///
/// Корректно обрабатывает поля в двойных кавычках и запятые внутри них.
///
/// # Примеры
///
/// ```
/// # use azmorph::utils::parse_csv_row;
/// let fields = parse_csv_row("кот,1046,0");
/// assert_eq!(fields, vec!["кот", "1046", "0"]);
/// ```
pub fn parse_csv_row(row: &str) -> Vec<String> {
    let mut fields = vec![];
    let mut rdr = csv_core::Reader::new();
    let mut bytes = row.as_bytes();
    let mut output = vec![0; 4096];
    let mut nwritten = 0;
    loop {
        let (result, nin, nout) = rdr.read_field(bytes, &mut output[nwritten..]);
        nwritten += nout;
        bytes = &bytes[nin..];
        match result {
            ReadFieldResult::OutputFull => {
                output.resize(output.len() * 2, 0);
                continue;
            }
            ReadFieldResult::Field { .. } => {
                fields.push(std::str::from_utf8(&output[..nwritten]).unwrap().to_string());
                nwritten = 0;
            }
            ReadFieldResult::InputEmpty | ReadFieldResult::End => {
                fields.push(std::str::from_utf8(&output[..nwritten]).unwrap().to_string());
                break;
            }
        }
    }
    fields
}
