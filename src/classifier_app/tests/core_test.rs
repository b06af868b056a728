#[cfg(test)]
mod core_test {

    use crate::classifier_app::core::{
        calculate_prediction, init, transition, Effect, Event, ModelStatus, State,
    };
    use crate::device_ui::interface::UiEvent;
    use crate::image_classifier::interface::{ModelVariant, Prediction};
    use std::path::PathBuf;

    fn ready_state() -> State {
        let (mut state, _) = init();
        state.models.set(ModelVariant::V1, ModelStatus::Loaded);
        state.image = Some(PathBuf::from("cat.jpg"));
        state
    }

    #[test]
    fn test_init() {
        let (state, effects) = init();

        assert_eq!(state.models.get(ModelVariant::V1), ModelStatus::Loading);
        assert_eq!(state.models.get(ModelVariant::V2), ModelStatus::Loading);
        assert_eq!(state.models.get(ModelVariant::Tf), ModelStatus::Loading);
        assert_eq!(state.selected, ModelVariant::V1);
        assert!(state.image.is_none());
        assert!(state.prediction.is_none());

        assert_eq!(effects.len(), 4);
        assert!(effects.contains(&Effect::SubscribeUi));
        for variant in ModelVariant::ALL {
            assert!(effects.contains(&Effect::LoadModel(variant)));
        }
    }

    #[test]
    fn test_model_load_success() {
        let (state, _) = init();

        let (state, effects) =
            transition(state, Event::ModelLoadDone(ModelVariant::V2, Ok(())));

        assert_eq!(state.models.get(ModelVariant::V2), ModelStatus::Loaded);
        assert_eq!(state.models.get(ModelVariant::V1), ModelStatus::Loading);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_model_load_failure_is_isolated() {
        let (state, _) = init();

        let (state, _) = transition(
            state,
            Event::ModelLoadDone(ModelVariant::V1, Err("fetch failed".into())),
        );
        let (state, _) = transition(state, Event::ModelLoadDone(ModelVariant::V2, Ok(())));

        assert_eq!(state.models.get(ModelVariant::V1), ModelStatus::Failed);
        assert_eq!(state.models.get(ModelVariant::V2), ModelStatus::Loaded);
        assert_eq!(state.models.get(ModelVariant::Tf), ModelStatus::Loading);
    }

    #[test]
    fn test_image_chosen_clears_prediction() {
        let mut state = ready_state();
        state.prediction = Some(Prediction::Scores(vec![0.5; 10]));

        let (state, effects) = transition(
            state,
            Event::UiEvent(UiEvent::ImageChosen(PathBuf::from("dog.png"))),
        );

        assert!(state.prediction.is_none());
        assert_eq!(effects, vec![Effect::LoadImage(PathBuf::from("dog.png"))]);
    }

    #[test]
    fn test_image_load_done_sets_image() {
        let (state, _) = init();

        let (state, effects) =
            transition(state, Event::ImageLoadDone(Ok(PathBuf::from("dog.png"))));

        assert_eq!(state.image, Some(PathBuf::from("dog.png")));
        assert!(state.prediction.is_none());
        assert!(effects.is_empty());
    }

    #[test]
    fn test_image_load_failure_keeps_state() {
        let before = ready_state();

        let (after, effects) = transition(
            before.clone(),
            Event::ImageLoadDone(Err("decode failed".into())),
        );

        assert_eq!(after, before);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_variant_switch_clears_prediction() {
        let mut state = ready_state();
        state.prediction = Some(Prediction::Scores(vec![0.5; 10]));

        let (state, effects) = transition(
            state,
            Event::UiEvent(UiEvent::VariantChosen(ModelVariant::V2)),
        );

        assert_eq!(state.selected, ModelVariant::V2);
        assert!(state.prediction.is_none());
        assert!(effects.is_empty());
    }

    #[test]
    fn test_predict_without_image_is_inert() {
        let mut state = ready_state();
        state.image = None;

        let (state, effects) = transition(state, Event::UiEvent(UiEvent::PredictPressed));

        assert!(effects.is_empty());
        assert!(state.prediction.is_none());
    }

    #[test]
    fn test_predict_while_model_loading_is_inert() {
        let mut state = ready_state();
        state.models.set(ModelVariant::V1, ModelStatus::Loading);

        let (_, effects) = transition(state, Event::UiEvent(UiEvent::PredictPressed));

        assert!(effects.is_empty());
    }

    #[test]
    fn test_predict_with_failed_model_is_inert() {
        let mut state = ready_state();
        state.models.set(ModelVariant::V1, ModelStatus::Failed);

        let (_, effects) = transition(state, Event::UiEvent(UiEvent::PredictPressed));

        assert!(effects.is_empty());
    }

    #[test]
    fn test_predict_emits_classify_for_selected_variant() {
        let mut state = ready_state();
        state.models.set(ModelVariant::Tf, ModelStatus::Loaded);
        state.selected = ModelVariant::Tf;

        let (_, effects) = transition(state, Event::UiEvent(UiEvent::PredictPressed));

        assert_eq!(effects, vec![Effect::Classify(ModelVariant::Tf)]);
    }

    #[test]
    fn test_classify_done_sets_prediction() {
        let state = ready_state();
        let scores = vec![0.0, 0.9, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.1];

        let (state, effects) = transition(
            state,
            Event::ClassifyDone(Ok(Prediction::Scores(scores.clone()))),
        );

        assert_eq!(state.prediction, Some(Prediction::Scores(scores)));
        assert!(effects.is_empty());
    }

    #[test]
    fn test_classify_failure_keeps_state() {
        let before = ready_state();

        let (after, effects) = transition(
            before.clone(),
            Event::ClassifyDone(Err("inference failed".into())),
        );

        assert_eq!(after, before);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_calculate_prediction_picks_maximum() {
        assert_eq!(calculate_prediction(&[0.1, 0.7, 0.2]), 1);
        assert_eq!(calculate_prediction(&[0.9, 0.7, 0.2]), 0);
        assert_eq!(calculate_prediction(&[0.1, 0.2, 0.9]), 2);
    }

    #[test]
    fn test_calculate_prediction_ties_keep_first_occurrence() {
        assert_eq!(calculate_prediction(&[0.3, 0.5, 0.5]), 1);
        assert_eq!(calculate_prediction(&[0.5, 0.5]), 0);
    }

    #[test]
    fn test_calculate_prediction_all_zero_reports_first() {
        assert_eq!(calculate_prediction(&[0.0; 10]), 0);
        assert_eq!(calculate_prediction(&[]), 0);
    }

    #[test]
    fn test_calculate_prediction_non_positive_scores_report_first() {
        // The running maximum starts at 0, so nothing displaces index 0 here
        assert_eq!(calculate_prediction(&[-3.0, -1.0, -2.0]), 0);
    }
}
