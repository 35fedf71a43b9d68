use crate::data::Agent;

/// Replays `choices` from the initial finger positions.
///
/// The first pair is the initial one, every following pair is the state after pressing
/// the corresponding target so the result has one more element than `targets`.
pub fn reconstruct_path<T: Copy>(
    left: T,
    right: T,
    targets: &[T],
    choices: &[Agent],
) -> Vec<(T, T)> {
    debug_assert_eq!(targets.len(), choices.len());

    let mut path = Vec::with_capacity(targets.len() + 1);
    let (mut left, mut right) = (left, right);
    path.push((left, right));
    for (&target, &agent) in targets.iter().zip(choices) {
        match agent {
            Agent::Left => left = target,
            Agent::Right => right = target,
        }
        path.push((left, right));
    }
    path
}
