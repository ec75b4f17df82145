use criterion::{Criterion, black_box, criterion_group, criterion_main};
use wordle_constraints::core::{FeedbackCode, Word, compute_feedback};
use wordle_constraints::solver::{ConstraintSpace, GuessSelector, score, selector::score_naive};
use wordle_constraints::wordlists::{ALLOWED, ANSWERS, loader::words_from_slice};

fn criterion_benchmark(c: &mut Criterion) {
    let answers = words_from_slice(ANSWERS);
    let pool = words_from_slice(ALLOWED);
    let salet = Word::new("salet").unwrap();
    let crane = Word::new("crane").unwrap();

    c.bench_function("feedback all answers", |b| {
        b.iter(|| {
            answers
                .iter()
                .map(|answer| compute_feedback(black_box(&salet), answer))
                .filter(FeedbackCode::is_solved)
                .count()
        });
    });

    let full = ConstraintSpace::new(&answers);
    c.bench_function("score grouped", |b| {
        b.iter(|| score(black_box(&crane), &full));
    });
    c.bench_function("score naive", |b| {
        b.iter(|| score_naive(black_box(&crane), &full));
    });

    // Narrow to a mid-game candidate set
    let mut space = ConstraintSpace::new(&answers);
    space
        .apply(&salet, FeedbackCode::parse("uwuuu").unwrap())
        .unwrap();

    let sequential = GuessSelector::new();
    let parallel = GuessSelector::new().with_parallel(true);
    c.bench_function("choose sequential", |b| {
        b.iter(|| sequential.choose(&pool, black_box(&space)));
    });
    c.bench_function("choose parallel", |b| {
        b.iter(|| parallel.choose(&pool, black_box(&space)));
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
