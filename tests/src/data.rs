use std::fs;
use std::path::Path;

/// папка с текстами на разных языках
const TEXTS_DIR: &str = "./../test_data/texts";

/// тексты для сравнения с реализацией UTF-8 стандартной библиотеки: (название, текст)
pub fn texts() -> Vec<(String, String)>
{
    let mut data: Vec<(String, String)> = fs::read_dir(TEXTS_DIR)
        .unwrap()
        .map(|entry| {
            let path = entry.unwrap().path();

            (get_name(&path), fs::read_to_string(&path).unwrap())
        })
        .collect();

    data.sort_by(|a, b| a.0.cmp(&b.0));

    assert!(!data.is_empty(), "нет текстов в {}", TEXTS_DIR);

    data
}

/// название файла без расширения
fn get_name(path: &Path) -> String
{
    path.file_stem().unwrap().to_string_lossy().into_owned()
}
