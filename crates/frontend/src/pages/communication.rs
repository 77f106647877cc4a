use crate::shared::components::ui::{Button, Input, Select, Textarea};
use crate::shared::data::communication as data;
use crate::shared::date_utils::{format_time_12h, relative_time};
use crate::shared::forms::{Form, FormControl, FormField, FormItem, FormManager, FormMessage, Rule};
use crate::shared::icons::icon;
use chrono::Utc;
use contracts::domain::communication::{
    BroadcastAudience, BroadcastNote, BroadcastRequest, ChatMessage,
};
use leptos::logging::log;
use leptos::prelude::*;

/// Team chat, store broadcast and dispatch feed.
#[component]
pub fn CommunicationPage() -> impl IntoView {
    let now = Utc::now();

    let channels = data::channels();
    let (selected_key, set_selected_key) = signal("team".to_string());
    let (messages, set_messages) = signal(data::initial_messages(now));
    let (draft, set_draft) = signal(String::new());
    let (broadcasts, set_broadcasts) = signal(data::recent_broadcasts(now));

    let header_name = {
        let channels = channels.clone();
        move || {
            channels
                .iter()
                .find(|c| c.key == selected_key.get())
                .map(|c| c.name.clone())
                .unwrap_or_default()
        }
    };
    let header_online = {
        let channels = channels.clone();
        move || {
            channels
                .iter()
                .find(|c| c.key == selected_key.get())
                .map(|c| c.online)
                .unwrap_or(0)
        }
    };

    let channel_pills: Vec<_> = channels
        .iter()
        .map(|channel| {
            let key = channel.key.clone();
            let active_key = channel.key.clone();
            let pill_class = move || {
                if selected_key.get() == active_key {
                    "channel-pill channel-pill--active"
                } else {
                    "channel-pill"
                }
            };
            let unread = (channel.unread > 0)
                .then(|| view! { <span class="channel-pill__unread">{channel.unread}</span> });
            view! {
                <button class=pill_class on:click=move |_| set_selected_key.set(key.clone())>
                    {icon("users")}
                    <span>{channel.name.clone()}</span>
                    {unread}
                </button>
            }
        })
        .collect();

    let handle_send = move || {
        let body = draft.get().trim().to_string();
        if body.is_empty() {
            return;
        }
        set_messages.update(|thread| thread.push(ChatMessage::own(body, Utc::now())));
        set_draft.set(String::new());
    };
    let send_on_click = Callback::new(move |_: leptos::ev::MouseEvent| handle_send());
    let send_on_enter = Callback::new(move |_: ()| handle_send());

    let broadcast_manager = FormManager::new()
        .with_field("message", "", vec![Rule::Required, Rule::MaxLen(200)])
        .with_field(
            "audience",
            BroadcastAudience::AllStaff.code(),
            vec![Rule::Required],
        );

    let audience_options: Vec<(String, String)> = BroadcastAudience::all()
        .iter()
        .map(|a| (a.code().to_string(), a.label().to_string()))
        .collect();
    let message_value = Signal::derive(move || broadcast_manager.value("message"));
    let audience_value = Signal::derive(move || broadcast_manager.value("audience"));

    let handle_broadcast = Callback::new(move |_: ()| {
        let message = broadcast_manager.value("message").trim().to_string();
        let audience = BroadcastAudience::from_code(&broadcast_manager.value("audience"))
            .unwrap_or(BroadcastAudience::AllStaff);
        let request = BroadcastRequest {
            audience,
            message: message.clone(),
        };
        match serde_json::to_string(&request) {
            Ok(json) => log!("Broadcast sent: {}", json),
            Err(err) => log!("Broadcast serialization failed: {}", err),
        }
        set_broadcasts.update(|notes| {
            notes.insert(
                0,
                BroadcastNote {
                    message,
                    audience,
                    sent_at: Utc::now(),
                },
            );
        });
        broadcast_manager.reset();
    });

    let recent_notes = move || {
        broadcasts
            .get()
            .into_iter()
            .map(|note| {
                let when = relative_time(note.sent_at, Utc::now());
                let meta = format!("{} • {}", note.audience.label(), when);
                view! {
                    <div class="broadcast__note">
                        <p class="broadcast__quote">{format!("\"{}\"", note.message)}</p>
                        <p class="broadcast__meta">{meta}</p>
                    </div>
                }
            })
            .collect_view()
    };

    let dispatch_cards: Vec<_> = data::dispatch_updates(now)
        .into_iter()
        .map(|update| {
            let when = relative_time(update.posted_at, now);
            let card_class = format!("dispatch dispatch--{}", update.kind.code());
            view! {
                <div class=card_class>
                    <div class="dispatch__icon">{icon(&update.icon)}</div>
                    <div class="dispatch__body">
                        <p class="dispatch__title">{update.title}</p>
                        <p class="dispatch__detail">{update.detail}</p>
                        <p class="dispatch__time">{when}</p>
                    </div>
                </div>
            }
        })
        .collect();

    let contact_rows: Vec<_> = data::quick_contacts()
        .into_iter()
        .map(|contact| {
            let initials = contact.initials();
            let dot_class = format!("presence-dot presence-dot--{}", contact.presence.code());
            let status = contact.presence.label();
            view! {
                <div class="contact-row">
                    <div class="contact-row__avatar">{initials}</div>
                    <div class="contact-row__info">
                        <p class="contact-row__name">{contact.name}</p>
                        <div class="contact-row__presence">
                            <span class=dot_class></span>
                            <span class="contact-row__status">{status}</span>
                        </div>
                    </div>
                    <button class="contact-row__send" aria-label="Message">
                        {icon("send")}
                    </button>
                </div>
            }
        })
        .collect();

    view! {
        <div class="communication">
            <section class="card chat">
                <div class="chat__header">
                    <div>
                        <h2 class="card__title">{header_name}</h2>
                        <p class="chat__online">
                            {move || format!("{} members online", header_online())}
                        </p>
                    </div>
                    <Button variant="primary" class="chat__broadcast-btn">
                        {icon("megaphone")}
                        "Broadcast"
                    </Button>
                </div>

                <div class="chat__channels">{channel_pills}</div>

                <div class="chat__messages">
                    <For
                        each=move || messages.get()
                        key=|message| message.id
                        children=move |message: ChatMessage| {
                            let wrapper = if message.is_own {
                                "message message--own"
                            } else {
                                "message"
                            };
                            let sender = (!message.is_own)
                                .then(|| {
                                    view! { <p class="message__sender">{message.sender.clone()}</p> }
                                });
                            let attachment = message
                                .attachment
                                .clone()
                                .map(|file| {
                                    view! {
                                        <div class="message__attachment">
                                            {icon("paperclip")}
                                            <span>{file}</span>
                                        </div>
                                    }
                                });
                            let sent = format_time_12h(message.sent_at.time());
                            view! {
                                <div class=wrapper>
                                    <div class="message__content">
                                        {sender}
                                        <div class="message__bubble">
                                            <p>{message.body.clone()}</p>
                                            {attachment}
                                        </div>
                                        <p class="message__time">{sent}</p>
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>

                <div class="chat__composer">
                    <button class="chat__attach" aria-label="Attach file">
                        {icon("paperclip")}
                    </button>
                    <Input
                        value=draft
                        on_input=Callback::new(move |v: String| set_draft.set(v))
                        on_enter=send_on_enter
                        placeholder="Type a message..."
                        class="chat__input"
                    />
                    <Button on_click=send_on_click>
                        {icon("send")}
                        "Send"
                    </Button>
                </div>
            </section>

            <div class="communication__side">
                <section class="card broadcast">
                    <div class="broadcast__header">
                        {icon("megaphone")}
                        <h3 class="card__title">"Store Broadcast"</h3>
                    </div>
                    <Form manager=broadcast_manager on_submit=handle_broadcast class="broadcast__form">
                        <FormField name="message">
                            <FormItem>
                                <FormControl>
                                    <Textarea
                                        value=message_value
                                        on_input=Callback::new(move |v: String| {
                                            broadcast_manager.set_value("message", v);
                                        })
                                        on_blur=Callback::new(move |_| {
                                            broadcast_manager.touch("message");
                                        })
                                        placeholder="Send a message to all staff members..."
                                        rows=4
                                    />
                                </FormControl>
                                <FormMessage />
                            </FormItem>
                        </FormField>

                        <FormField name="audience">
                            <FormItem>
                                <FormControl>
                                    <Select
                                        value=audience_value
                                        on_change=Callback::new(move |v: String| {
                                            broadcast_manager.set_value("audience", v);
                                        })
                                        options=audience_options
                                    />
                                </FormControl>
                                <FormMessage />
                            </FormItem>
                        </FormField>

                        <Button button_type="submit" variant="warning" class="broadcast__submit">
                            "Broadcast"
                        </Button>
                    </Form>

                    <div class="broadcast__recent">
                        <p class="broadcast__recent-label">"Recent Broadcasts"</p>
                        {recent_notes}
                    </div>
                </section>

                <section class="card">
                    <h3 class="card__title">"Dispatch Updates"</h3>
                    <div class="dispatch-list">{dispatch_cards}</div>
                </section>

                <section class="card">
                    <h3 class="card__title">"Quick Contact"</h3>
                    <div class="contact-list">{contact_rows}</div>
                </section>
            </div>
        </div>
    }
}
