//! сверка данных UCD и отчетов с эталонными реализациями

#[cfg(test)]
mod data;
#[cfg(test)]
mod icu;
