// Criterion benchmarks for Cat Match

use cat_match::core::{eligible_candidates, score_cat, truncate_for_tier, Matcher};
use cat_match::models::{
    CatProfile, CatStatus, Compatibility, ExperienceLevel, Gender, HealthStatus, LifestyleAnswers,
    Personality, SpecialSituation, Tier,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const PERSONALITIES: [Personality; 6] = [
    Personality::Playful,
    Personality::Calm,
    Personality::Shy,
    Personality::Independent,
    Personality::Affectionate,
    Personality::Curious,
];

const COMPATIBILITIES: [Compatibility; 4] = [
    Compatibility::Cats,
    Compatibility::Dogs,
    Compatibility::Children,
    Compatibility::Elderly,
];

fn create_candidate(id: usize) -> CatProfile {
    CatProfile {
        id: id.to_string(),
        name: format!("Cat {}", id),
        breed: "Domestic Shorthair".to_string(),
        age: (id % 15) as u8,
        gender: if id % 2 == 0 { Gender::Female } else { Gender::Male },
        personality: vec![PERSONALITIES[id % 6], PERSONALITIES[(id / 6) % 6]],
        compatibility: vec![COMPATIBILITIES[id % 4]],
        health_status: match id % 7 {
            0 => HealthStatus::Chronic,
            1 => HealthStatus::Treatment,
            2 => HealthStatus::Recovery,
            _ => HealthStatus::Healthy,
        },
        status: if id % 5 == 0 { CatStatus::Foster } else { CatStatus::Adoption },
        shelter_id: Some(format!("shelter_{}", id % 3)),
        description: None,
        image_url: None,
        heart_adoption: id % 11 == 0,
        created_at: None,
    }
}

fn create_answers() -> LifestyleAnswers {
    LifestyleAnswers {
        hours_away: 9,
        has_children: true,
        has_other_cats: true,
        experience_level: ExperienceLevel::First,
        special_situation: SpecialSituation::Elderly,
        ..LifestyleAnswers::default()
    }
}

fn bench_score_cat(c: &mut Criterion) {
    let answers = create_answers();
    let cat = create_candidate(7);

    c.bench_function("score_cat", |b| {
        b.iter(|| score_cat(black_box(&answers), black_box(&cat)));
    });
}

fn bench_matching(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let answers = create_answers();

    let mut group = c.benchmark_group("matching");

    for candidate_count in [10, 50, 100, 500, 1000].iter() {
        let candidates: Vec<CatProfile> = (0..*candidate_count).map(create_candidate).collect();

        group.bench_with_input(
            BenchmarkId::new("match_all_cats", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| matcher.match_all_cats(black_box(&answers), black_box(&candidates)));
            },
        );
    }

    group.finish();
}

fn bench_find_pipeline(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let answers = create_answers();
    let catalog: Vec<CatProfile> = (0..500).map(create_candidate).collect();

    c.bench_function("find_pipeline_500_cats_free_tier", |b| {
        b.iter(|| {
            let candidates = eligible_candidates(catalog.clone());
            let ranked = matcher.match_all_cats(&answers, &candidates);
            black_box(truncate_for_tier(ranked, Tier::Free, 3))
        });
    });
}

criterion_group!(benches, bench_score_cat, bench_matching, bench_find_pipeline);

criterion_main!(benches);
