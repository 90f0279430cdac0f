use crate::store::form::intent::FormIntent;
use crate::store::form::state::{Field, FormState};
use crate::store::mvi::Reducer;

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::SetFieldValue { field, value } => {
                state.field_mut(field).value = value;
                state.refresh_errors();
                state
            }
            FormIntent::TouchField(field) => {
                state.field_mut(field).touched = true;
                state
            }
            FormIntent::Submit => {
                if state.submitting {
                    return state;
                }
                for field in Field::ALL {
                    state.field_mut(field).touched = true;
                }
                state.refresh_errors();
                state.submitting = state.is_valid();
                state
            }
            FormIntent::SubmitFailed => FormState {
                submitting: false,
                ..state
            },
        }
    }
}
