pub const WARM_UP_TIME: u64 = 3;
pub const MEASUREMENT_TIME: u64 = 7;

/// папка с текстами
pub const TEXTS_DIR: &str = "./../test_data/texts";
/// сколько раз повторяем текст, чтобы замер не был слишком коротким
pub const REPEAT: usize = 16;

/// группа бенчмарков: для каждого текста готовим входные данные ($prepare) и замеряем $test
#[macro_export]
macro_rules! group {
    ($fn: ident, $group: expr, $name: expr, $prepare: expr, $test: expr) => {
        fn $fn(c: &mut Criterion)
        {
            let mut group = c.benchmark_group($group);

            group.warm_up_time(core::time::Duration::from_secs(group::WARM_UP_TIME));
            group.measurement_time(core::time::Duration::from_secs(group::MEASUREMENT_TIME));

            for (text_name, text) in group::read_dir(group::TEXTS_DIR, group::REPEAT) {
                let input = $prepare(text.as_str());

                group.throughput(criterion::Throughput::Bytes(text.len() as u64));
                group.bench_with_input(
                    criterion::BenchmarkId::new($name, &text_name),
                    &input,
                    |b, input| b.iter(|| $test(criterion::black_box(input))),
                );
            }

            group.finish();
        }
    };
}

/// прочитать папку с текстами, каждый текст повторён `times` раз
pub fn read_dir(dir: &str, times: usize) -> Vec<(String, String)>
{
    let mut data: Vec<(String, String)> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| {
            let path = entry.unwrap().path();
            let name = path.file_stem().unwrap().to_string_lossy().into_owned();

            (name, std::fs::read_to_string(&path).unwrap().repeat(times))
        })
        .collect();

    data.sort_by(|a, b| a.0.cmp(&b.0));

    data
}
