use criterion::{black_box, criterion_group, criterion_main, Criterion};
use subrank_core::{NameMatcher, Stream, StreamRanker, SubtitleEntry};

fn sample_streams() -> Vec<Stream> {
    (0..60)
        .map(|i| {
            Stream::new()
                .with_title(format!(
                    "Movie.Name.2021.{}p.WEB-DL.x264-GRP{i}\n👤 {} 💾 2.{i} GB",
                    [720, 1080, 2160][i % 3],
                    i * 7
                ))
                .with_name("Torrentio\n1080p")
                .with_filename(format!("Movie.Name.2021.1080p.WEB-DL.x264-GRP{i}.mkv"))
        })
        .collect()
}

fn sample_subtitles() -> Vec<SubtitleEntry> {
    (0..25)
        .map(|i| SubtitleEntry::new(format!("Movie.Name.2021.1080p.WEB-DL.x264-GRP{i}")))
        .collect()
}

fn bench_rank(c: &mut Criterion) {
    let ranker = StreamRanker::new().unwrap();
    let streams = sample_streams();
    let subtitles = sample_subtitles();

    c.bench_function("best_score_25_refs", |b| {
        let matcher = NameMatcher::from_subtitles(&subtitles);
        b.iter(|| matcher.best_score(black_box("Movie.Name.2021.1080p.WEB-DL.x264-GRP7.mkv")));
    });

    c.bench_function("rank_60_streams_25_subs", |b| {
        b.iter(|| ranker.rank(black_box(&streams), black_box(&subtitles)));
    });

    let no_subtitles: Vec<SubtitleEntry> = Vec::new();
    c.bench_function("rank_60_streams_no_subs", |b| {
        b.iter(|| ranker.rank(black_box(&streams), black_box(&no_subtitles)));
    });
}

criterion_group!(benches, bench_rank);
criterion_main!(benches);
