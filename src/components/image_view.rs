use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlElement, TouchEvent, TouchList};
use yew::prelude::*;

use super::zoom_controls::ZoomControls;
use crate::state::{DragState, TouchGesture, TouchPoint};

const MIN_SCALE: f64 = 1.0;
const MAX_SCALE: f64 = 4.0;
const WHEEL_ZOOM_RATE: f64 = 0.001;
const BUTTON_ZOOM_STEP: f64 = 1.25;

fn touch_points(list: &TouchList) -> Vec<TouchPoint> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|t| TouchPoint {
            x: t.client_x() as f64,
            y: t.client_y() as f64,
        })
        .collect()
}

#[derive(Properties, PartialEq, Clone)]
pub struct ImageViewProps {
    pub src: AttrValue,
    pub is_mobile: bool,
}

#[function_component(ImageView)]
pub fn image_view(props: &ImageViewProps) -> Html {
    let surface_ref = use_node_ref();
    let image_ref = use_node_ref();
    let drag_state = use_mut_ref(DragState::default);
    let gesture = use_mut_ref(|| TouchGesture::new(MIN_SCALE, MAX_SCALE));
    let scale = use_mut_ref(|| 1.0_f64);
    let apply_ref = use_mut_ref(|| None::<Rc<dyn Fn()>>);

    // Mount effect: wire pointer/touch/wheel listeners to the gesture state
    {
        let surface_ref = surface_ref.clone();
        let image_ref = image_ref.clone();
        let drag_state = drag_state.clone();
        let gesture = gesture.clone();
        let scale = scale.clone();
        let apply_ref_setup = apply_ref.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("window");
            let surface: HtmlElement = surface_ref
                .cast::<HtmlElement>()
                .expect("surface_ref not attached to an element");
            let image: HtmlElement = image_ref
                .cast::<HtmlElement>()
                .expect("image_ref not attached to an element");

            // Write the current pan offset and scale into the image transform
            let apply_transform: Rc<dyn Fn()> = {
                let drag_state = drag_state.clone();
                let scale = scale.clone();
                let image = image.clone();
                Rc::new(move || {
                    let ds = drag_state.borrow();
                    let s = *scale.borrow();
                    let value = format!(
                        "translate({}px, {}px) scale({})",
                        ds.translate_x, ds.translate_y, s
                    );
                    let _ = image.style().set_property("transform", &value);
                })
            };
            *apply_ref_setup.borrow_mut() = Some(apply_transform.clone());

            // Mouse drag: incremental reference point, same sink as touch pan
            let mousedown_cb = {
                let drag_state = drag_state.clone();
                Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                    if e.button() == 0 {
                        drag_state
                            .borrow_mut()
                            .start_drag(e.client_x() as f64, e.client_y() as f64);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            let _ = surface
                .add_event_listener_with_callback("mousedown", mousedown_cb.as_ref().unchecked_ref());

            let mousemove_cb = {
                let drag_state = drag_state.clone();
                let apply = apply_transform.clone();
                Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                    let mut ds = drag_state.borrow_mut();
                    if !ds.active {
                        return;
                    }
                    ds.on_drag_move(e.client_x() as f64, e.client_y() as f64);
                    drop(ds);
                    apply();
                }) as Box<dyn FnMut(_)>)
            };
            let _ = surface
                .add_event_listener_with_callback("mousemove", mousemove_cb.as_ref().unchecked_ref());

            let mouseup_cb = {
                let drag_state = drag_state.clone();
                Closure::wrap(Box::new(move |_e: web_sys::MouseEvent| {
                    drag_state.borrow_mut().end_drag();
                }) as Box<dyn FnMut(_)>)
            };
            let _ = window
                .add_event_listener_with_callback("mouseup", mouseup_cb.as_ref().unchecked_ref());

            // Touch: one finger pans against the gesture origin, two pinch
            let touch_start_cb = {
                let drag_state = drag_state.clone();
                let gesture = gesture.clone();
                let scale = scale.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    let points = touch_points(&e.touches());
                    if points.len() == 2 {
                        e.prevent_default();
                    }
                    gesture
                        .borrow_mut()
                        .on_touch_start(&points, *scale.borrow(), &drag_state.borrow());
                }) as Box<dyn FnMut(_)>)
            };
            let _ = surface.add_event_listener_with_callback(
                "touchstart",
                touch_start_cb.as_ref().unchecked_ref(),
            );

            let touch_move_cb = {
                let drag_state = drag_state.clone();
                let gesture = gesture.clone();
                let scale = scale.clone();
                let apply = apply_transform.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    let points = touch_points(&e.touches());
                    let mut g = gesture.borrow_mut();
                    if g.is_dragging() || g.is_pinching() {
                        e.prevent_default();
                    }
                    let mut ds = drag_state.borrow_mut();
                    let mut s = scale.borrow_mut();
                    g.on_touch_move(&points, &mut ds, &mut s);
                    drop(s);
                    drop(ds);
                    drop(g);
                    apply();
                }) as Box<dyn FnMut(_)>)
            };
            let _ = surface.add_event_listener_with_callback(
                "touchmove",
                touch_move_cb.as_ref().unchecked_ref(),
            );

            let touch_end_cb = {
                let gesture = gesture.clone();
                Closure::wrap(Box::new(move |_e: TouchEvent| {
                    gesture.borrow_mut().on_touch_end();
                }) as Box<dyn FnMut(_)>)
            };
            let _ = surface
                .add_event_listener_with_callback("touchend", touch_end_cb.as_ref().unchecked_ref());
            let _ = surface.add_event_listener_with_callback(
                "touchcancel",
                touch_end_cb.as_ref().unchecked_ref(),
            );

            // Wheel zoom for the desktop path, clamped like the pinch output
            let wheel_cb = {
                let scale = scale.clone();
                let apply = apply_transform.clone();
                Closure::wrap(Box::new(move |e: web_sys::WheelEvent| {
                    e.prevent_default();
                    let mut s = scale.borrow_mut();
                    let factor = (-e.delta_y() * WHEEL_ZOOM_RATE).exp();
                    *s = (*s * factor).clamp(MIN_SCALE, MAX_SCALE);
                    drop(s);
                    apply();
                }) as Box<dyn FnMut(_)>)
            };
            let _ = surface
                .add_event_listener_with_callback("wheel", wheel_cb.as_ref().unchecked_ref());

            // Native image drag would fight the pan
            let dragstart_cb = {
                Closure::wrap(Box::new(move |e: web_sys::Event| {
                    e.prevent_default();
                }) as Box<dyn FnMut(_)>)
            };
            let _ = surface.add_event_listener_with_callback(
                "dragstart",
                dragstart_cb.as_ref().unchecked_ref(),
            );

            apply_transform();

            // Cleanup
            let window_clone = window.clone();
            move || {
                let _ = surface.remove_event_listener_with_callback(
                    "mousedown",
                    mousedown_cb.as_ref().unchecked_ref(),
                );
                let _ = surface.remove_event_listener_with_callback(
                    "mousemove",
                    mousemove_cb.as_ref().unchecked_ref(),
                );
                let _ = window_clone.remove_event_listener_with_callback(
                    "mouseup",
                    mouseup_cb.as_ref().unchecked_ref(),
                );
                let _ = surface.remove_event_listener_with_callback(
                    "touchstart",
                    touch_start_cb.as_ref().unchecked_ref(),
                );
                let _ = surface.remove_event_listener_with_callback(
                    "touchmove",
                    touch_move_cb.as_ref().unchecked_ref(),
                );
                let _ = surface.remove_event_listener_with_callback(
                    "touchend",
                    touch_end_cb.as_ref().unchecked_ref(),
                );
                let _ = surface.remove_event_listener_with_callback(
                    "touchcancel",
                    touch_end_cb.as_ref().unchecked_ref(),
                );
                let _ = surface.remove_event_listener_with_callback(
                    "wheel",
                    wheel_cb.as_ref().unchecked_ref(),
                );
                let _ = surface.remove_event_listener_with_callback(
                    "dragstart",
                    dragstart_cb.as_ref().unchecked_ref(),
                );
                let _keep_alive = (
                    &mousedown_cb,
                    &mousemove_cb,
                    &mouseup_cb,
                    &touch_start_cb,
                    &touch_move_cb,
                    &touch_end_cb,
                    &wheel_cb,
                    &dragstart_cb,
                );
            }
        });
    }

    let zoom_in = {
        let scale = scale.clone();
        let apply_ref = apply_ref.clone();
        Callback::from(move |_| {
            let mut s = scale.borrow_mut();
            *s = (*s * BUTTON_ZOOM_STEP).clamp(MIN_SCALE, MAX_SCALE);
            drop(s);
            if let Some(f) = &*apply_ref.borrow() {
                f();
            }
        })
    };
    let zoom_out = {
        let scale = scale.clone();
        let apply_ref = apply_ref.clone();
        Callback::from(move |_| {
            let mut s = scale.borrow_mut();
            *s = (*s / BUTTON_ZOOM_STEP).clamp(MIN_SCALE, MAX_SCALE);
            drop(s);
            if let Some(f) = &*apply_ref.borrow() {
                f();
            }
        })
    };
    let reset_view = {
        let drag_state = drag_state.clone();
        let scale = scale.clone();
        let apply_ref = apply_ref.clone();
        Callback::from(move |_| {
            drag_state.borrow_mut().reset_position();
            *scale.borrow_mut() = 1.0;
            if let Some(f) = &*apply_ref.borrow() {
                f();
            }
        })
    };

    let hint = if props.is_mobile {
        "Drag with one finger to pan, pinch with two to zoom"
    } else {
        "Drag to pan, scroll to zoom"
    };

    html! {
        <div
            ref={surface_ref}
            style="position:relative; width:100vw; height:100vh; overflow:hidden; background:#0e1116; display:flex; align-items:center; justify-content:center; touch-action:none; cursor:grab;"
        >
            <img
                ref={image_ref}
                src={props.src.clone()}
                alt="viewed image"
                draggable="false"
                style="max-width:90%; max-height:90%; user-select:none; -webkit-user-select:none; will-change:transform;"
            />
            <div style="position:absolute; top:12px; left:12px; color:#8b949e; font-size:12px; pointer-events:none;">
                { hint }
            </div>
            <ZoomControls on_zoom_in={zoom_in} on_zoom_out={zoom_out} on_reset={reset_view} />
        </div>
    }
}
