use super::table::PaperRecord;
use crate::error::{ReviewError, Result};
use rand::rngs::StdRng;
use rand::seq::index;
use rand::SeedableRng;
use std::collections::HashSet;

/// 抽出済みの論文を除いた候補を返す
///
/// 候補一覧内で識別子が重複する論文は最初の1件のみ残す。
pub fn exclude_selected(records: &[PaperRecord], selected: &HashSet<String>) -> Vec<PaperRecord> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut pool = Vec::with_capacity(records.len());

    for record in records {
        if !seen.insert(record.id.as_str()) {
            log::warn!("識別子が重複しています（最初の1件のみ使用）: {}", record.id);
            continue;
        }
        if selected.contains(&record.id) {
            continue;
        }
        pool.push(record.clone());
    }

    pool
}

/// 重複なしで `number` 件を無作為に抽出
///
/// `seed` を指定すると結果が再現可能になる。
pub fn sample<T: Clone>(pool: &[T], number: usize, seed: Option<u64>) -> Result<Vec<T>> {
    if number == 0 {
        return Err(ReviewError::EmptySample);
    }
    if number > pool.len() {
        return Err(ReviewError::InsufficientPool {
            requested: number,
            available: pool.len(),
        });
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    Ok(index::sample(&mut rng, pool.len(), number)
        .into_iter()
        .map(|i| pool[i].clone())
        .collect())
}
